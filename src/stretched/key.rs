//! Stretched key type.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hash::ChainHasher;

/// The output of a stretching run: one digest of the chain's hash function.
///
/// Equality is constant-time and the bytes are zeroed when the value is
/// dropped. `Debug` does not print the key material; `Display` prints hex.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StretchedKey(Vec<u8>);

impl StretchedKey {
    pub(crate) fn from_hasher<H: ChainHasher>(hasher: &H) -> Self {
        Self(hasher.digest())
    }

    /// Creates a stretched key from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes (the digest size of the hash that produced it).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the key holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves the bytes out. The caller becomes responsible for wiping them.
    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }

    /// Returns the key as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses a key from a hex string.
    ///
    /// Returns `None` if the string is not valid hex.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        hex::decode(hex_str).ok().map(Self)
    }
}

impl AsRef<[u8]> for StretchedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for StretchedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for StretchedKey {}

impl fmt::Debug for StretchedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StretchedKey({} bytes)", self.0.len())
    }
}

impl fmt::Display for StretchedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
