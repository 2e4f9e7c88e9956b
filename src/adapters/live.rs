//! Live adapter for the `RandomSource` port.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::ClusterIdError;
use crate::ports::RandomSource;

/// Randomness drawn from the operating system's entropy source.
pub struct OsRandomSource;

impl OsRandomSource {
    /// Creates a new OS-backed randomness source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandomSource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), ClusterIdError> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}
