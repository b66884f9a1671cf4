//! Digest providers for the hash chain.
//!
//! The chain engines are generic over [`ChainHasher`], an incremental hash
//! with a non-destructive `digest()`. Backends:
//!
//! - [`DigestHasher`] - adapter over any RustCrypto [`digest::Digest`]
//! - [`Sha256Hasher`] / [`Sha512Hasher`] - SHA-2 (requires `hash-sha2` feature)
//! - [`Blake3Hasher`] - BLAKE3 (requires `hash-blake3` feature)

mod rustcrypto;

#[cfg(feature = "hash-blake3")]
mod blake3;

pub use rustcrypto::DigestHasher;
#[cfg(feature = "hash-sha2")]
pub use rustcrypto::{Sha256Hasher, Sha512Hasher};

#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3Hasher;

use crate::error::{BloatError, Result};

/// Number of leading digest bytes consumed to derive a table index.
pub const INDEX_BYTES: usize = 8;

/// An incremental hash usable as the state of a hash chain.
///
/// Each chain owns its hasher exclusively; `digest_into` must not disturb the
/// state so that updates can continue after reading it.
pub trait ChainHasher: Sized {
    /// Creates a fresh, unkeyed hash state.
    fn new() -> Self;

    /// Size of a digest in bytes.
    fn digest_size() -> usize;

    /// Feeds more data into the state.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest of everything fed so far into `out`.
    ///
    /// `out` is exactly [`ChainHasher::digest_size`] bytes long.
    fn digest_into(&self, out: &mut [u8]);

    /// Creates a state already fed with `seed`.
    fn with_seed(seed: &[u8]) -> Self {
        let mut hasher = Self::new();
        hasher.update(seed);
        hasher
    }

    /// Returns the current digest as an owned buffer.
    fn digest(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::digest_size()];
        self.digest_into(&mut out);
        out
    }

    /// One-shot hash of `data`.
    fn hash(data: &[u8]) -> Vec<u8> {
        Self::with_seed(data).digest()
    }
}

/// Checks that `H` produces enough bytes to derive a table index.
pub(crate) fn ensure_compatible<H: ChainHasher>() -> Result<usize> {
    let digest_size = H::digest_size();
    if digest_size < INDEX_BYTES {
        return Err(BloatError::IncompatibleHashProvider {
            digest_size,
            required: INDEX_BYTES,
        });
    }
    Ok(digest_size)
}

/// Maps a digest to a position in a table of `len` entries.
///
/// Reads the first eight bytes as a big-endian `u64` and reduces it modulo
/// `len`. `digest` must hold at least [`INDEX_BYTES`] bytes and `len` must be
/// non-zero.
pub(crate) fn random_position(digest: &[u8], len: usize) -> usize {
    let mut head = [0u8; INDEX_BYTES];
    head.copy_from_slice(&digest[..INDEX_BYTES]);
    // len fits in u64 and the remainder is below len, so both casts are lossless.
    (u64::from_be_bytes(head) % len as u64) as usize
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A hasher whose digest is too short to index the table.
    pub(crate) struct TinyHasher(u32);

    impl ChainHasher for TinyHasher {
        fn new() -> Self {
            TinyHasher(0)
        }

        fn digest_size() -> usize {
            4
        }

        fn update(&mut self, data: &[u8]) {
            for b in data {
                self.0 = self.0.rotate_left(5) ^ u32::from(*b);
            }
        }

        fn digest_into(&self, out: &mut [u8]) {
            out.copy_from_slice(&self.0.to_be_bytes());
        }
    }

    #[test]
    fn test_random_position_big_endian() {
        let mut digest = [0u8; 16];
        digest[7] = 5;
        assert_eq!(random_position(&digest, 10), 5);
        assert_eq!(random_position(&digest, 3), 2);

        // Only the leading eight bytes take part.
        digest[8] = 0xff;
        assert_eq!(random_position(&digest, 10), 5);

        digest[0] = 1;
        // 2^56 + 5 mod 7: 2^56 = (2^3)^18 * 2^2, and 8 = 1 mod 7, so 4 + 5 = 9 = 2 mod 7
        assert_eq!(random_position(&digest, 7), 2);
    }

    #[test]
    fn test_random_position_single_entry() {
        assert_eq!(random_position(&[0xff; 8], 1), 0);
    }

    #[test]
    fn test_ensure_compatible_rejects_short_digest() {
        let err = ensure_compatible::<TinyHasher>().unwrap_err();
        assert!(matches!(
            err,
            BloatError::IncompatibleHashProvider {
                digest_size: 4,
                required: 8
            }
        ));
    }

    #[cfg(feature = "hash-sha2")]
    #[test]
    fn test_ensure_compatible_accepts_sha512() {
        assert_eq!(ensure_compatible::<Sha512Hasher>().unwrap(), 64);
    }
}
