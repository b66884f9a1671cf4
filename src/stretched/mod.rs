//! The stretched key produced by every variant.
//!
//! - [`StretchedKey`] - owned digest with hex encoding, wiped on drop

mod key;

pub use key::StretchedKey;
