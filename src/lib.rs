//! keybloat
//!
//! Memory-hard key stretching for Rust.
//!
//! `keybloat` turns a low-entropy key into a fixed-size digest that is costly
//! to compute in both CPU time and memory. A single hash state is updated in
//! a sequential chain; every round appends the running digest to a table and
//! feeds back the entry at a position chosen by that digest, so the final
//! output depends on the whole table.
//!
//! - [`bloat`] - the memory-resident chain
//! - [`multibloat`] - independent chains per stream, combined in order
//! - [`crazybloat`] - the same chain without a table, recomputing on demand
//! - [`iterations_to_memory`] / [`memory_to_iterations`] - size a run to a budget
//! - [`integrity_test`] - recorded SHA-512 vectors
//!
//! The crate intentionally:
//! - does NOT salt keys
//! - does NOT encode its output
//! - does NOT pick a hash for you beyond the feature-gated backends
//!
//! It only does one thing: **key in → stretched key out**
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "hash-sha2")]
//! use keybloat::{BloatConfig, Sha512Hasher, Stretcher};
//!
//! # #[cfg(feature = "hash-sha2")]
//! fn main() -> Result<(), keybloat::BloatError> {
//!     // 4 streams of 4 MiB each
//!     let config = BloatConfig::for_memory::<Sha512Hasher>(4 << 20)?.with_streams(4);
//!     let stretcher = Stretcher::<Sha512Hasher>::new(config)?;
//!
//!     let key = stretcher.multibloat(b"correct horse")?;
//!     println!("stretched key {}", key.to_hex());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "hash-sha2"))]
//! # fn main() {}
//! ```
//!
//! # Features
//!
//! - `hash-sha2` (default) - [`Sha256Hasher`], [`Sha512Hasher`], [`integrity_test`]
//! - `hash-blake3` - [`Blake3Hasher`]
//! - `parallel` (default) - run `multibloat` streams on a rayon pool

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capacity;
mod chain;
mod config;
mod error;
mod hash;
mod multi;
mod recursive;
mod stretched;
mod stretcher;

#[cfg(feature = "hash-sha2")]
mod conformance;

//
// Public surface (intentionally tiny)
//

pub use capacity::{iterations_to_memory, memory_to_iterations, multibloat_memory};
pub use chain::bloat;
pub use config::{BloatConfig, DEFAULT_ITERATIONS, DEFAULT_STREAMS};
pub use error::{BloatError, Result};
pub use hash::{ChainHasher, DigestHasher, INDEX_BYTES};
pub use multi::{derive_stream_key, multibloat};
pub use recursive::crazybloat;
pub use stretched::StretchedKey;
pub use stretcher::Stretcher;

#[cfg(feature = "hash-sha2")]
pub use hash::{Sha256Hasher, Sha512Hasher};

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;

#[cfg(feature = "hash-sha2")]
pub use conformance::{TestVector, VECTORS, check_vector, integrity_test};
