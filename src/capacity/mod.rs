//! Conversions between iteration counts and memory footprints.
//!
//! One chain iteration stores one digest, so the table of a `bloat` run with
//! `n` iterations occupies `n * digest_size` bytes.

use crate::error::{BloatError, Result};
use crate::hash::ChainHasher;

/// Memory in bytes needed by a `bloat` table of `iterations` entries.
///
/// # Errors
///
/// Returns [`BloatError::InvalidParameter`] if the product overflows `u64`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-sha2")]
/// # fn main() -> Result<(), keybloat::BloatError> {
/// use keybloat::{Sha512Hasher, iterations_to_memory};
///
/// assert_eq!(iterations_to_memory::<Sha512Hasher>(1024)?, 64 * 1024);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "hash-sha2"))]
/// # fn main() {}
/// ```
pub fn iterations_to_memory<H: ChainHasher>(iterations: u64) -> Result<u64> {
    iterations
        .checked_mul(H::digest_size() as u64)
        .ok_or_else(|| {
            BloatError::invalid("iterations", iterations, "memory requirement overflows u64")
        })
}

/// Number of iterations whose table fits in `memory` bytes (rounded down).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-sha2")]
/// # fn main() -> Result<(), keybloat::BloatError> {
/// use keybloat::{Sha256Hasher, memory_to_iterations};
///
/// assert_eq!(memory_to_iterations::<Sha256Hasher>(1 << 20), 32768);
/// assert_eq!(memory_to_iterations::<Sha256Hasher>(31), 0);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "hash-sha2"))]
/// # fn main() {}
/// ```
pub fn memory_to_iterations<H: ChainHasher>(memory: u64) -> u64 {
    memory.checked_div(H::digest_size() as u64).unwrap_or(0)
}

/// Peak memory of a `multibloat` run with every stream resident at once.
///
/// # Errors
///
/// Returns [`BloatError::InvalidParameter`] if the product overflows `u64`.
pub fn multibloat_memory<H: ChainHasher>(iterations: u64, streams: u64) -> Result<u64> {
    iterations_to_memory::<H>(iterations)?
        .checked_mul(streams)
        .ok_or_else(|| BloatError::invalid("streams", streams, "memory requirement overflows u64"))
}
