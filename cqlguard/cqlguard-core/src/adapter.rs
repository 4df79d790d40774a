//! Adapter that exposes an externally supplied typed codec as a [`ByteBufferCodec`].

use bytes::{Buf, Bytes};

use crate::{
    codec::ByteBufferCodec, cql_type::CqlType, error::CodecError,
    protocol_version::ProtocolVersion,
};

/// A typed codec owned by an external driver or mapping layer.
///
/// The codec is told which protocol version to speak on every call.
/// Failures are reported as boxed errors and converted by [`AdaptingCodec`].
pub trait TypeCodec<T>: Send + Sync {
    /// The CQL type this codec reads and writes.
    fn cql_type(&self) -> CqlType;

    fn encode(
        &self,
        value: &T,
        version: ProtocolVersion,
    ) -> Result<Bytes, Box<dyn std::error::Error + Send + Sync>>;

    fn decode(
        &self,
        bytes: Option<&mut dyn Buf>,
        version: ProtocolVersion,
    ) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

/// Wraps a [`TypeCodec`] behind the [`ByteBufferCodec`] contract using a
/// protocol version fixed at construction.
///
/// Both directions delegate exactly once; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct AdaptingCodec<C> {
    inner: C,
    version: ProtocolVersion,
}

impl<C> AdaptingCodec<C> {
    pub fn new(inner: C, version: ProtocolVersion) -> Self {
        Self { inner, version }
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> ByteBufferCodec<T> for AdaptingCodec<C>
where
    C: TypeCodec<T>,
{
    fn serialize(&self, value: &T) -> Result<Bytes, CodecError> {
        self.inner
            .encode(value, self.version)
            .map_err(|source| CodecError::Serialize {
                cql_type: self.inner.cql_type(),
                version: self.version,
                source,
            })
    }

    fn deserialize(&self, bytes: Option<&mut dyn Buf>) -> Result<T, CodecError> {
        self.inner
            .decode(bytes, self.version)
            .map_err(|source| CodecError::Deserialize {
                cql_type: self.inner.cql_type(),
                version: self.version,
                source,
            })
    }
}
