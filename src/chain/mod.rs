//! Sequential hash-chain engine.
//!
//! - [`bloat`] - memory-resident chain over an owned digest table

mod engine;
mod table;

pub use engine::bloat;
