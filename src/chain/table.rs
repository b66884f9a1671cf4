//! Append-only digest table backing one chain run.

use std::fmt;

use zeroize::Zeroize;

use crate::error::{BloatError, Result};
use crate::hash::ChainHasher;

/// Flat buffer of fixed-size digests, indexed `0..len`.
///
/// The full capacity is reserved up front so a run that cannot fit fails
/// before hashing anything. Contents are wiped on drop.
pub(crate) struct ChainTable {
    data: Vec<u8>,
    digest_size: usize,
}

impl ChainTable {
    /// Reserves room for `entries` digests of `digest_size` bytes.
    pub(crate) fn with_capacity(entries: usize, digest_size: usize) -> Result<Self> {
        let requested = entries as u128 * digest_size as u128;
        let bytes = entries
            .checked_mul(digest_size)
            .ok_or(BloatError::OutOfMemory { requested })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| BloatError::OutOfMemory { requested })?;

        Ok(Self { data, digest_size })
    }

    /// Appends the current digest of `hasher` and returns it.
    pub(crate) fn push_digest<H: ChainHasher>(&mut self, hasher: &H) -> &[u8] {
        let start = self.data.len();
        self.data.resize(start + self.digest_size, 0);
        let slot = &mut self.data[start..];
        hasher.digest_into(slot);
        slot
    }

    /// Returns the digest at `index`.
    pub(crate) fn get(&self, index: usize) -> &[u8] {
        let start = index * self.digest_size;
        &self.data[start..start + self.digest_size]
    }

    /// Number of digests stored.
    pub(crate) fn len(&self) -> usize {
        self.data.len() / self.digest_size
    }

    /// Reserved size in bytes.
    pub(crate) fn capacity_bytes(&self) -> usize {
        self.data.capacity()
    }
}

impl fmt::Debug for ChainTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainTable")
            .field("len", &self.len())
            .field("digest_size", &self.digest_size)
            .finish_non_exhaustive()
    }
}

impl Drop for ChainTable {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
