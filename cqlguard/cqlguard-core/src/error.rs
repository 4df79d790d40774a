//! Error types for the codec layer.

use crate::{cql_type::CqlType, protocol_version::ProtocolVersion};

/// Error returned by [`ByteBufferCodec`](crate::ByteBufferCodec) implementations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The buffer length matches neither the type's fixed width nor the empty sentinel.
    #[error("invalid {cql_type} value: expected {expected} bytes, found {found}")]
    InvalidFormat {
        cql_type: CqlType,
        expected: usize,
        found: usize,
    },

    /// A wrapped [`TypeCodec`](crate::TypeCodec) failed to encode a value.
    #[error("failed to serialize {cql_type} value (protocol {version}): {source}")]
    Serialize {
        cql_type: CqlType,
        version: ProtocolVersion,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A wrapped [`TypeCodec`](crate::TypeCodec) failed to decode a value.
    #[error("failed to deserialize {cql_type} value (protocol {version}): {source}")]
    Deserialize {
        cql_type: CqlType,
        version: ProtocolVersion,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The native protocol version number is not one this crate speaks.
    #[error("unsupported native protocol version: {0}")]
    UnsupportedProtocolVersion(u8),
}
