//! Configured entry point over a fixed hash function.
//!
//! - [`Stretcher`] - binds a [`BloatConfig`] to a [`ChainHasher`]

mod engine;

pub use engine::Stretcher;
