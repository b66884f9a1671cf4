//! The `bloat` hash chain.
//!
//! Each iteration appends the running digest to the table, derives a random
//! position from that digest and feeds the entry at that position back into
//! the hasher. The final digest depends transitively on every table entry, so
//! skipping the table means recomputing it.

use tracing::debug;

use crate::chain::table::ChainTable;
use crate::error::{BloatError, Result};
use crate::hash::{ChainHasher, ensure_compatible, random_position};
use crate::stretched::StretchedKey;

/// One step of a chain run, as seen right after the append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) struct ChainStep {
    /// Iteration index `c`.
    pub(crate) index: usize,
    /// Table length after the append (always `index + 1`).
    pub(crate) table_len: usize,
    /// Position whose digest is fed back.
    pub(crate) position: usize,
}

/// Stretches `key` with `iterations` rounds of the memory-resident chain.
///
/// Peak memory is `iterations * H::digest_size()` bytes for the table plus
/// one hash state.
///
/// # Errors
///
/// - [`BloatError::InvalidParameter`] if `iterations` is zero
/// - [`BloatError::IncompatibleHashProvider`] if `H` has digests shorter than 8 bytes
/// - [`BloatError::OutOfMemory`] if the table cannot be allocated
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-sha2")]
/// # fn main() -> Result<(), keybloat::BloatError> {
/// use keybloat::{Sha512Hasher, bloat};
///
/// let key = bloat::<Sha512Hasher>(b"test", 1024)?;
/// assert_eq!(key.len(), 64);
/// assert!(key.to_hex().starts_with("12054e5c"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "hash-sha2"))]
/// # fn main() {}
/// ```
pub fn bloat<H: ChainHasher>(key: &[u8], iterations: usize) -> Result<StretchedKey> {
    run_chain::<H, _>(key, iterations, |_| {})
}

/// Runs the chain, reporting every step to `observe`.
pub(crate) fn run_chain<H, F>(key: &[u8], iterations: usize, mut observe: F) -> Result<StretchedKey>
where
    H: ChainHasher,
    F: FnMut(ChainStep),
{
    if iterations == 0 {
        return Err(BloatError::invalid(
            "iterations",
            0,
            "bloat needs at least one iteration",
        ));
    }
    let digest_size = ensure_compatible::<H>()?;
    let mut table = ChainTable::with_capacity(iterations, digest_size)?;

    debug!(
        iterations,
        digest_size,
        table_bytes = table.capacity_bytes(),
        "bloat start"
    );

    let mut hasher = H::with_seed(key);
    for index in 0..iterations {
        let latest = table.push_digest(&hasher);
        let position = random_position(latest, index + 1);
        observe(ChainStep {
            index,
            table_len: table.len(),
            position,
        });
        hasher.update(table.get(position));
    }

    debug!(iterations, "bloat done");
    Ok(StretchedKey::from_hasher(&hasher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::tests::TinyHasher;

    #[test]
    fn test_zero_iterations_rejected() {
        let err = run_chain::<TinyHasher, _>(b"key", 0, |_| {}).unwrap_err();
        assert!(matches!(
            err,
            BloatError::InvalidParameter {
                name: "iterations",
                value: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_short_digest_rejected() {
        let err = run_chain::<TinyHasher, _>(b"key", 4, |_| {}).unwrap_err();
        assert!(matches!(err, BloatError::IncompatibleHashProvider { .. }));
    }

    #[cfg(feature = "hash-sha2")]
    mod sha2_backed {
        use super::*;
        use crate::hash::{Sha256Hasher, Sha512Hasher};
        use hex_literal::hex;

        #[test]
        fn test_table_length_and_position_bounds() {
            let mut steps = Vec::new();
            run_chain::<Sha256Hasher, _>(b"invariants", 500, |step| steps.push(step)).unwrap();

            assert_eq!(steps.len(), 500);
            for (c, step) in steps.iter().enumerate() {
                assert_eq!(step.index, c);
                assert_eq!(step.table_len, c + 1);
                assert!(step.position <= c);
            }
        }

        #[test]
        fn test_first_position_is_zero() {
            let mut first = None;
            run_chain::<Sha512Hasher, _>(b"any", 1, |step| first = Some(step)).unwrap();
            assert_eq!(
                first,
                Some(ChainStep {
                    index: 0,
                    table_len: 1,
                    position: 0
                })
            );
        }

        #[test]
        fn test_single_iteration_folds_seed_digest() {
            let seed_digest = Sha512Hasher::hash(b"test");
            let mut expected = Sha512Hasher::with_seed(b"test");
            expected.update(&seed_digest);

            let key = bloat::<Sha512Hasher>(b"test", 1).unwrap();
            assert_eq!(key.as_bytes(), expected.digest().as_slice());
        }

        #[test]
        fn test_small_sha256_vector() {
            let key = bloat::<Sha256Hasher>(b"test", 3).unwrap();
            assert_eq!(
                key.as_bytes(),
                hex!("98974588d9bf9cb833bf595a1708509f0c92669321f660e23af986faad070967")
            );
        }

        #[test]
        fn test_deterministic() {
            let a = bloat::<Sha256Hasher>(b"repeat", 256).unwrap();
            let b = bloat::<Sha256Hasher>(b"repeat", 256).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn test_iterations_change_output() {
            let a = bloat::<Sha256Hasher>(b"key", 10).unwrap();
            let b = bloat::<Sha256Hasher>(b"key", 11).unwrap();
            assert_ne!(a, b);
        }
    }
}
