//! Fixed adapter for the `RandomSource` port.

use crate::error::ClusterIdError;
use crate::ports::RandomSource;

/// Serves a predetermined byte sequence instead of real entropy.
///
/// Lets tests feed the pipeline known bytes (the all-zero case included)
/// without touching the operating system.
pub struct FixedRandomSource {
    bytes: Vec<u8>,
}

impl FixedRandomSource {
    /// Creates a source that serves `bytes` on every fill.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }
}

impl RandomSource for FixedRandomSource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), ClusterIdError> {
        assert_eq!(
            buf.len(),
            self.bytes.len(),
            "fixed source holds {} bytes, caller asked for {}",
            self.bytes.len(),
            buf.len()
        );
        buf.copy_from_slice(&self.bytes);
        Ok(())
    }
}
