//! Randomness source port for producing identifier bytes.

use crate::error::ClusterIdError;

/// Supplies raw random bytes.
///
/// Abstracting the randomness source lets tests drive the pipeline with a
/// predetermined byte sequence instead of operating-system entropy.
pub trait RandomSource: Send + Sync {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterIdError::Generation`] when the underlying source is
    /// exhausted or unavailable.
    fn fill(&self, buf: &mut [u8]) -> Result<(), ClusterIdError>;
}
