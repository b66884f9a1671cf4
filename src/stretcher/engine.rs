//! Stretcher - a validated configuration bound to a hash function.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "hash-sha2")]
//! # fn main() -> Result<(), keybloat::BloatError> {
//! use keybloat::{BloatConfig, Sha512Hasher, Stretcher};
//!
//! let config = BloatConfig::new(1024, 4)?;
//! let stretcher = Stretcher::<Sha512Hasher>::new(config)?;
//!
//! let single = stretcher.bloat(b"test")?;
//! let multi = stretcher.multibloat(b"test")?;
//! assert_ne!(single, multi);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "hash-sha2"))]
//! # fn main() {}
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::chain::bloat;
use crate::config::BloatConfig;
use crate::error::Result;
use crate::hash::{ChainHasher, ensure_compatible};
use crate::multi::multibloat_with;
use crate::recursive::crazybloat;
use crate::stretched::StretchedKey;

/// Runs the stretching variants with one configuration and hash function.
///
/// The configuration and the hash's digest size are checked once in
/// [`Stretcher::new`]; the per-call methods only do the work. The stretcher
/// holds no state between calls and can be shared across threads.
pub struct Stretcher<H> {
    config: BloatConfig,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: ChainHasher> Stretcher<H> {
    /// Creates a stretcher, validating `config` and the digest size of `H`.
    pub fn new(config: BloatConfig) -> Result<Self> {
        config.validate()?;
        ensure_compatible::<H>()?;
        Ok(Self {
            config,
            _hasher: PhantomData,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BloatConfig {
        &self.config
    }

    /// Single chain of `config.iterations()` rounds.
    pub fn bloat(&self, key: &[u8]) -> Result<StretchedKey> {
        bloat::<H>(key, self.config.iterations())
    }

    /// `config.streams()` chains combined, on the configured workers.
    pub fn multibloat(&self, key: &[u8]) -> Result<StretchedKey> {
        multibloat_with::<H>(
            key,
            self.config.iterations(),
            self.config.streams(),
            self.config.workers(),
        )
    }

    /// Table-free single chain. Only practical for tiny iteration counts.
    pub fn crazybloat(&self, key: &[u8]) -> Result<StretchedKey> {
        crazybloat::<H>(key, self.config.iterations())
    }

    /// Peak table memory of [`Stretcher::multibloat`] in bytes.
    pub fn memory_required(&self) -> Result<u64> {
        self.config.memory_required::<H>()
    }
}

impl<H> Clone for Stretcher<H> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            _hasher: PhantomData,
        }
    }
}

impl<H> fmt::Debug for Stretcher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stretcher")
            .field("hasher", &std::any::type_name::<H>())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloatError;
    use crate::hash::tests::TinyHasher;

    #[test]
    fn test_rejects_short_digest() {
        let err = Stretcher::<TinyHasher>::new(BloatConfig::default()).unwrap_err();
        assert!(matches!(err, BloatError::IncompatibleHashProvider { .. }));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BloatConfig::default().with_streams(0);
        assert!(Stretcher::<TinyHasher>::new(config).is_err());
    }

    #[cfg(feature = "hash-sha2")]
    mod sha2_backed {
        use super::*;
        use crate::hash::Sha256Hasher;
        use crate::multi::multibloat;

        fn stretcher(iterations: usize, streams: usize) -> Stretcher<Sha256Hasher> {
            Stretcher::new(BloatConfig::new(iterations, streams).unwrap()).unwrap()
        }

        #[test]
        fn test_methods_match_free_functions() {
            let s = stretcher(12, 3);
            assert_eq!(s.bloat(b"pw").unwrap(), bloat::<Sha256Hasher>(b"pw", 12).unwrap());
            assert_eq!(
                s.multibloat(b"pw").unwrap(),
                multibloat::<Sha256Hasher>(b"pw", 12, 3).unwrap()
            );
            assert_eq!(s.crazybloat(b"pw").unwrap(), s.bloat(b"pw").unwrap());
        }

        #[test]
        fn test_workers_respected() {
            let config = BloatConfig::new(32, 4).unwrap().with_workers(2);
            let s = Stretcher::<Sha256Hasher>::new(config).unwrap();
            assert_eq!(s.config().workers(), Some(2));
            assert_eq!(
                s.multibloat(b"pw").unwrap(),
                multibloat::<Sha256Hasher>(b"pw", 32, 4).unwrap()
            );
        }

        #[test]
        fn test_memory_required() {
            assert_eq!(stretcher(100, 2).memory_required().unwrap(), 6400);
        }

        #[test]
        fn test_debug_names_hasher() {
            let dbg = format!("{:?}", stretcher(1, 1));
            assert!(dbg.contains("Stretcher"));
            assert!(dbg.contains("DigestHasher"));
        }
    }
}
