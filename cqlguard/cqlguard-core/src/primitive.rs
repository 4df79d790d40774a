//! Fixed-width big-endian codecs for the CQL primitive types.

use std::marker::PhantomData;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::{codec::ByteBufferCodec, cql_type::CqlType, error::CodecError};

/// A primitive whose native protocol encoding has a constant byte width.
///
/// `Default::default()` is the value decoded when no bytes were sent.
pub trait FixedWidth: Copy + Default + Send + Sync + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    fn cql_type() -> CqlType;

    /// Append exactly [`Self::WIDTH`] big-endian bytes.
    fn put(self, buf: &mut BytesMut);

    /// Read exactly [`Self::WIDTH`] bytes. The caller checks the length.
    fn get(buf: &mut dyn Buf) -> Self;
}

impl FixedWidth for bool {
    const WIDTH: usize = 1;

    fn cql_type() -> CqlType {
        CqlType::Boolean
    }

    fn put(self, buf: &mut BytesMut) {
        buf.put_u8(u8::from(self));
    }

    fn get(buf: &mut dyn Buf) -> Self {
        buf.get_u8() != 0
    }
}

macro_rules! fixed_width_number {
    ($ty:ty, $cql:ident, $put:ident, $get:ident) => {
        impl FixedWidth for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn cql_type() -> CqlType {
                CqlType::$cql
            }

            fn put(self, buf: &mut BytesMut) {
                buf.$put(self);
            }

            fn get(buf: &mut dyn Buf) -> Self {
                buf.$get()
            }
        }
    };
}

fixed_width_number!(i8, TinyInt, put_i8, get_i8);
fixed_width_number!(i16, SmallInt, put_i16, get_i16);
fixed_width_number!(i32, Int, put_i32, get_i32);
fixed_width_number!(i64, BigInt, put_i64, get_i64);
fixed_width_number!(f32, Float, put_f32, get_f32);
fixed_width_number!(f64, Double, put_f64, get_f64);

/// [`ByteBufferCodec`] for a [`FixedWidth`] primitive.
///
/// Decoding accepts three shapes of input:
/// - no buffer, or a buffer with nothing remaining: the type's default value;
/// - exactly `WIDTH` remaining bytes: the decoded value;
/// - anything else: [`CodecError::InvalidFormat`].
pub struct PrimitiveCodec<T>(PhantomData<fn() -> T>);

pub type BooleanCodec = PrimitiveCodec<bool>;
pub type ByteCodec = PrimitiveCodec<i8>;
pub type ShortCodec = PrimitiveCodec<i16>;
pub type IntCodec = PrimitiveCodec<i32>;
pub type LongCodec = PrimitiveCodec<i64>;
pub type FloatCodec = PrimitiveCodec<f32>;
pub type DoubleCodec = PrimitiveCodec<f64>;

impl<T: FixedWidth> PrimitiveCodec<T> {
    pub const WIDTH: usize = T::WIDTH;

    pub const fn new() -> Self {
        Self(PhantomData)
    }

    pub fn cql_type(&self) -> CqlType {
        T::cql_type()
    }
}

impl<T: FixedWidth> Default for PrimitiveCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedWidth> Clone for PrimitiveCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FixedWidth> Copy for PrimitiveCodec<T> {}

impl<T: FixedWidth> std::fmt::Debug for PrimitiveCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrimitiveCodec<{}>", T::cql_type())
    }
}

impl<T: FixedWidth> ByteBufferCodec<T> for PrimitiveCodec<T> {
    fn serialize(&self, value: &T) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::with_capacity(T::WIDTH);
        T::put(*value, &mut buf);
        Ok(buf.freeze())
    }

    fn deserialize(&self, bytes: Option<&mut dyn Buf>) -> Result<T, CodecError> {
        let Some(buf) = bytes else {
            return Ok(T::default());
        };
        match buf.remaining() {
            0 => Ok(T::default()),
            n if n == T::WIDTH => Ok(T::get(buf)),
            found => Err(CodecError::InvalidFormat {
                cql_type: T::cql_type(),
                expected: T::WIDTH,
                found,
            }),
        }
    }
}
