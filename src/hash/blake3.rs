//! BLAKE3 chain hasher.

use super::ChainHasher;

/// A [`ChainHasher`] that computes BLAKE3 hashes (32-byte digests).
#[derive(Debug, Clone, Default)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl ChainHasher for Blake3Hasher {
    fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    fn digest_size() -> usize {
        blake3::OUT_LEN
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn digest_into(&self, out: &mut [u8]) {
        // blake3 finalize takes &self and does not consume the state.
        out.copy_from_slice(self.state.finalize().as_bytes());
    }
}
