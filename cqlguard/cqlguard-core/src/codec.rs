//! The uniform codec contract shared by primitive and adapted codecs.

use bytes::{Buf, Bytes};

use crate::error::CodecError;

/// Converts values of `T` to and from their native protocol byte representation.
///
/// Implementations are stateless and shared freely across threads.
/// For every value `v`, `deserialize(serialize(v))` yields `v` again.
pub trait ByteBufferCodec<T>: Send + Sync {
    /// Encode `value` into a freshly allocated buffer.
    fn serialize(&self, value: &T) -> Result<Bytes, CodecError>;

    /// Decode a value from the remaining bytes of `bytes`.
    ///
    /// `None` means no value was sent at all. The read starts at the buffer's
    /// current position and advances it past the consumed bytes.
    fn deserialize(&self, bytes: Option<&mut dyn Buf>) -> Result<T, CodecError>;

    /// Decode a value from a byte slice holding exactly one encoded value.
    fn deserialize_slice(&self, data: &[u8]) -> Result<T, CodecError> {
        let mut window = data;
        self.deserialize(Some(&mut window))
    }
}
