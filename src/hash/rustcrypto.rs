//! Adapter from RustCrypto `digest` hashes to [`ChainHasher`].

use digest::Digest;

use super::ChainHasher;

/// A [`ChainHasher`] backed by any RustCrypto [`Digest`].
///
/// `digest_into` finalizes a clone, leaving the running state untouched.
#[derive(Debug, Clone, Default)]
pub struct DigestHasher<D> {
    state: D,
}

impl<D: Digest + Clone> ChainHasher for DigestHasher<D> {
    fn new() -> Self {
        Self { state: D::new() }
    }

    fn digest_size() -> usize {
        <D as Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn digest_into(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.state.clone().finalize());
    }
}

/// SHA-256 chain hasher (32-byte digests).
#[cfg(feature = "hash-sha2")]
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

/// SHA-512 chain hasher (64-byte digests).
#[cfg(feature = "hash-sha2")]
pub type Sha512Hasher = DigestHasher<sha2::Sha512>;

#[cfg(all(test, feature = "hash-sha2"))]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_digest_sizes() {
        assert_eq!(Sha256Hasher::digest_size(), 32);
        assert_eq!(Sha512Hasher::digest_size(), 64);
    }

    #[test]
    fn test_known_digest() {
        let digest = Sha256Hasher::hash(b"abc");
        assert_eq!(
            digest,
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_digest_is_non_destructive() {
        let mut hasher = Sha512Hasher::with_seed(b"hello ");
        let first = hasher.digest();
        assert_eq!(first, hasher.digest());

        hasher.update(b"world");
        assert_eq!(hasher.digest(), Sha512Hasher::hash(b"hello world"));
    }
}
