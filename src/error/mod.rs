//! Error types for keybloat.

use thiserror::Error;

/// Errors that can occur while stretching a key.
///
/// Every error is raised before any output is produced; there are no partial
/// results.
#[derive(Debug, Error)]
pub enum BloatError {
    /// A parameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was supplied.
        value: u64,
        /// The constraint it violates.
        constraint: &'static str,
    },

    /// The hash function cannot drive the chain.
    #[error(
        "incompatible hash provider: digest size {digest_size} bytes (at least {required} required)"
    )]
    IncompatibleHashProvider {
        /// Digest size reported by the provider.
        digest_size: usize,
        /// Minimum digest size needed to derive a table index.
        required: usize,
    },

    /// A recorded test vector did not reproduce.
    #[error("conformance vector `{vector}` failed: expected {expected}, got {actual}")]
    ConformanceFailure {
        /// Name of the failing vector.
        vector: &'static str,
        /// Expected digest as hex.
        expected: String,
        /// Computed digest as hex.
        actual: String,
    },

    /// The chain table could not be allocated.
    #[error("cannot allocate chain table of {requested} bytes")]
    OutOfMemory {
        /// Number of bytes requested for the table.
        requested: u128,
    },

    /// The dedicated worker pool could not be started.
    #[error("worker pool error: {0}")]
    ThreadPool(String),
}

impl BloatError {
    pub(crate) fn invalid(name: &'static str, value: u64, constraint: &'static str) -> Self {
        BloatError::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BloatError>;
