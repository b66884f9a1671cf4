//! Table-free variant of the chain.
//!
//! [`crazybloat`] never stores a digest. Whenever iteration `c` needs the
//! entry at position `p`, it rebuilds that entry by running a fresh chain of
//! `p` iterations from the key, which in turn rebuilds the entries it needs.
//! Memory drops to one hash state per nesting level while the work grows far
//! faster than the iteration count. It exists to show the far end of the
//! memory/CPU trade-off, not for production use.
//!
//! Nested chains live on an explicit heap stack rather than the call stack.

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{BloatError, Result};
use crate::hash::{ChainHasher, ensure_compatible, random_position};
use crate::stretched::StretchedKey;

/// A chain in progress: its state, how many iterations it has done and how
/// many it needs.
struct Frame<H> {
    hasher: H,
    step: usize,
    target: usize,
}

impl<H: ChainHasher> Frame<H> {
    fn seeded(key: &[u8], target: usize) -> Self {
        Self {
            hasher: H::with_seed(key),
            step: 0,
            target,
        }
    }
}

/// Stretches `key` like [`bloat`](crate::bloat) without keeping a table.
///
/// Each entry a chain reads back is recomputed from scratch by a nested chain
/// whose length equals the entry's position. Since a chain of `p` iterations
/// ends on exactly the digest `bloat` stores at position `p`, the result
/// matches `bloat` for the same inputs; only the cost differs.
///
/// Peak memory is one hash state per nesting level (at most `iterations`
/// levels). Running time is impractical beyond a few dozen iterations.
///
/// # Errors
///
/// - [`BloatError::InvalidParameter`] if `iterations` is zero
/// - [`BloatError::IncompatibleHashProvider`] if `H` has digests shorter than 8 bytes
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-sha2")]
/// # fn main() -> Result<(), keybloat::BloatError> {
/// use keybloat::{Sha256Hasher, bloat, crazybloat};
///
/// let slow = crazybloat::<Sha256Hasher>(b"key", 12)?;
/// assert_eq!(slow, bloat::<Sha256Hasher>(b"key", 12)?);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "hash-sha2"))]
/// # fn main() {}
/// ```
pub fn crazybloat<H: ChainHasher>(key: &[u8], iterations: usize) -> Result<StretchedKey> {
    if iterations == 0 {
        return Err(BloatError::invalid(
            "iterations",
            0,
            "crazybloat needs at least one iteration",
        ));
    }
    let digest_size = ensure_compatible::<H>()?;

    debug!(iterations, digest_size, "crazybloat start");

    let mut scratch = Zeroizing::new(vec![0u8; digest_size]);
    let mut root = Frame::<H>::seeded(key, iterations);
    let mut nested: Vec<Frame<H>> = Vec::new();
    let mut peak_depth = 0usize;
    let mut chains = 1u64;

    loop {
        let top = nested.last_mut().unwrap_or(&mut root);
        top.hasher.digest_into(&mut scratch);

        if top.step < top.target {
            let position = random_position(&scratch, top.step + 1);
            nested.push(Frame::seeded(key, position));
            peak_depth = peak_depth.max(nested.len());
            chains += 1;
            continue;
        }

        // `scratch` now holds the finished chain's digest.
        if nested.pop().is_none() {
            break;
        }
        let parent = nested.last_mut().unwrap_or(&mut root);
        parent.hasher.update(&scratch);
        parent.step += 1;
    }

    debug!(iterations, peak_depth, chains, "crazybloat done");
    Ok(StretchedKey::from_slice(&scratch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::tests::TinyHasher;

    #[test]
    fn test_zero_iterations_rejected() {
        let err = crazybloat::<TinyHasher>(b"key", 0).unwrap_err();
        assert!(matches!(
            err,
            BloatError::InvalidParameter {
                name: "iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_short_digest_rejected() {
        let err = crazybloat::<TinyHasher>(b"key", 3).unwrap_err();
        assert!(matches!(err, BloatError::IncompatibleHashProvider { .. }));
    }

    #[cfg(feature = "hash-sha2")]
    mod sha2_backed {
        use super::*;
        use crate::chain::bloat;
        use crate::hash::{Sha256Hasher, Sha512Hasher};

        #[test]
        fn test_matches_bloat_for_small_counts() {
            for iterations in 1..=14 {
                let slow = crazybloat::<Sha256Hasher>(b"k", iterations).unwrap();
                let fast = bloat::<Sha256Hasher>(b"k", iterations).unwrap();
                assert_eq!(slow, fast, "mismatch at {iterations} iterations");
            }
        }

        #[test]
        fn test_single_iteration() {
            let seed_digest = Sha512Hasher::hash(b"test");
            let mut expected = Sha512Hasher::with_seed(b"test");
            expected.update(&seed_digest);

            let key = crazybloat::<Sha512Hasher>(b"test", 1).unwrap();
            assert_eq!(key.as_bytes(), expected.digest().as_slice());
        }

        #[test]
        fn test_deterministic() {
            let a = crazybloat::<Sha512Hasher>(b"again", 10).unwrap();
            let b = crazybloat::<Sha512Hasher>(b"again", 10).unwrap();
            assert_eq!(a, b);
        }
    }
}
