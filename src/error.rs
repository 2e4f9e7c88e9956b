//! Error taxonomy for the generate → encode → emit pipeline.

use thiserror::Error;

/// Errors that can abort a run.
///
/// Every variant reflects an environment-level failure with no meaningful
/// local recovery, so none is retried: the process stops before any partial
/// output reaches stdout.
#[derive(Debug, Error)]
pub enum ClusterIdError {
    /// The operating-system randomness source was exhausted or unavailable.
    #[error("randomness source failure: {0}")]
    Generation(#[from] rand::Error),

    /// The encoder was handed a value that is not exactly 16 bytes.
    #[error("cluster id must be 16 bytes, got {len}")]
    Encoding {
        /// Length of the rejected input.
        len: usize,
    },

    /// The output stream was closed or unwritable.
    #[error("failed to write cluster id: {0}")]
    Io(#[from] std::io::Error),
}
