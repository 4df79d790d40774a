//! Wire-level building blocks for `cqlguard`.
//!
//! This crate provides the [`ByteBufferCodec`] contract, fixed-width codecs for
//! the CQL primitive types ([`PrimitiveCodec`]) and [`AdaptingCodec`], which
//! lifts an externally supplied [`TypeCodec`] into the same contract.

mod adapter;
mod codec;
mod cql_type;
mod error;
mod primitive;
mod protocol_version;

pub use adapter::{AdaptingCodec, TypeCodec};
pub use codec::ByteBufferCodec;
pub use cql_type::CqlType;
pub use error::CodecError;
pub use primitive::{
    BooleanCodec, ByteCodec, DoubleCodec, FixedWidth, FloatCodec, IntCodec, LongCodec,
    PrimitiveCodec, ShortCodec,
};
pub use protocol_version::ProtocolVersion;
