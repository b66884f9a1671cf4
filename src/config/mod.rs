//! Configuration for stretching runs.
//!
//! [`BloatConfig`] holds the cost parameters shared by every variant:
//!
//! - `iterations` - chain length, i.e. table entries per stream
//! - `streams` - independent chains combined by `multibloat`
//! - `workers` - size of a dedicated worker pool for the streams
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "hash-sha2")]
//! # fn main() -> Result<(), keybloat::BloatError> {
//! use keybloat::{BloatConfig, Sha512Hasher};
//!
//! // Explicit cost
//! let config = BloatConfig::new(1 << 16, 4)?;
//!
//! // Sized to a 64 MiB table per stream
//! let config = BloatConfig::for_memory::<Sha512Hasher>(64 << 20)?.with_streams(4);
//! assert_eq!(config.iterations(), 1 << 20);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "hash-sha2"))]
//! # fn main() {}
//! ```

use crate::capacity::{memory_to_iterations, multibloat_memory};
use crate::error::{BloatError, Result};
use crate::hash::ChainHasher;

/// Default chain length (2^16 iterations, 4 MiB of SHA-512 digests).
pub const DEFAULT_ITERATIONS: usize = 1 << 16;

/// Default number of streams.
pub const DEFAULT_STREAMS: usize = 1;

/// Cost parameters for a stretching run.
///
/// Constraints: `iterations >= 1`, `streams >= 1`, and `workers >= 1` when
/// set. Without `workers`, streams run on the global pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BloatConfig {
    iterations: usize,
    streams: usize,
    workers: Option<usize>,
}

impl BloatConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `iterations` or `streams` is zero.
    pub fn new(iterations: usize, streams: usize) -> Result<Self> {
        let config = Self {
            iterations,
            streams,
            workers: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a single-stream configuration whose table fits in `memory`
    /// bytes for hash `H`.
    ///
    /// Returns error if `memory` cannot hold a single digest.
    pub fn for_memory<H: ChainHasher>(memory: u64) -> Result<Self> {
        let iterations = memory_to_iterations::<H>(memory);
        if iterations == 0 {
            return Err(BloatError::invalid(
                "memory",
                memory,
                "budget must hold at least one digest",
            ));
        }
        let iterations = usize::try_from(iterations).map_err(|_| {
            BloatError::invalid("memory", memory, "budget exceeds addressable memory")
        })?;
        Self::new(iterations, DEFAULT_STREAMS)
    }

    /// Sets the chain length.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of streams.
    pub fn with_streams(mut self, streams: usize) -> Self {
        self.streams = streams;
        self
    }

    /// Runs streams on a dedicated pool of `workers` threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Returns the chain length.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of streams.
    pub fn streams(&self) -> usize {
        self.streams
    }

    /// Returns the dedicated worker count, if any.
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Peak table memory for hash `H` with all streams resident.
    pub fn memory_required<H: ChainHasher>(&self) -> Result<u64> {
        multibloat_memory::<H>(self.iterations as u64, self.streams as u64)
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BloatError::invalid(
                "iterations",
                0,
                "must be at least 1",
            ));
        }
        if self.streams == 0 {
            return Err(BloatError::invalid("streams", 0, "must be at least 1"));
        }
        if self.workers == Some(0) {
            return Err(BloatError::invalid("workers", 0, "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for BloatConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            streams: DEFAULT_STREAMS,
            workers: None,
        }
    }
}
