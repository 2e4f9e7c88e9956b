//! The cluster identifier entity.

use uuid::{Builder, Uuid};

use crate::error::ClusterIdError;
use crate::ports::RandomSource;

/// Number of raw bytes in a cluster identifier.
pub const ID_LEN: usize = 16;

/// A 128-bit identifier laid out as a version-4 UUID.
///
/// The version field is 4 and the variant field's top two bits are `10`;
/// the remaining 122 bits come from the [`RandomSource`] supplied at
/// construction. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterId(Uuid);

impl ClusterId {
    /// Generates a new identifier from the given randomness source.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterIdError::Generation`] when the source cannot produce
    /// 16 bytes; nothing downstream runs in that case.
    pub fn generate(source: &dyn RandomSource) -> Result<Self, ClusterIdError> {
        let mut bytes = [0u8; ID_LEN];
        source.fill(&mut bytes)?;
        // Builder stamps the version/variant marker bits over the raw bytes.
        Ok(Self(Builder::from_random_bytes(bytes).into_uuid()))
    }

    /// Raw big-endian bytes of the identifier.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        self.0.as_bytes()
    }
}
