//! Multi-stream combiner.
//!
//! [`multibloat`] derives one sub-key per stream, runs an independent
//! [`bloat`] chain for each and hashes the concatenated results in stream
//! order. Streams share nothing, so with the `parallel` feature they run on a
//! rayon pool; the join before concatenation keeps stream order regardless of
//! completion order.

use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::chain::bloat;
use crate::error::{BloatError, Result};
use crate::hash::{ChainHasher, ensure_compatible};
use crate::stretched::StretchedKey;

/// Derives the sub-key of stream `index`: `H(key || decimal(index))`.
///
/// The index is written as ASCII decimal digits with no separator and no
/// leading zeros.
pub fn derive_stream_key<H: ChainHasher>(key: &[u8], index: usize) -> Vec<u8> {
    let mut hasher = H::with_seed(key);
    hasher.update(index.to_string().as_bytes());
    hasher.digest()
}

/// Stretches `key` with `streams` independent chains of `iterations` each.
///
/// Streams run on the global rayon pool when the `parallel` feature is
/// enabled and sequentially otherwise; the output is the same either way.
/// Peak memory is up to `streams * iterations * H::digest_size()` bytes.
///
/// # Errors
///
/// - [`BloatError::InvalidParameter`] if `streams` or `iterations` is zero
/// - any error of [`bloat`] for the individual streams
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-sha2")]
/// # fn main() -> Result<(), keybloat::BloatError> {
/// use keybloat::{Sha512Hasher, multibloat};
///
/// let key = multibloat::<Sha512Hasher>(b"test", 1024, 4)?;
/// assert!(key.to_hex().starts_with("c2335a69"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "hash-sha2"))]
/// # fn main() {}
/// ```
pub fn multibloat<H: ChainHasher>(
    key: &[u8],
    iterations: usize,
    streams: usize,
) -> Result<StretchedKey> {
    multibloat_with::<H>(key, iterations, streams, None)
}

/// [`multibloat`] with an optional dedicated pool of `workers` threads.
pub(crate) fn multibloat_with<H: ChainHasher>(
    key: &[u8],
    iterations: usize,
    streams: usize,
    workers: Option<usize>,
) -> Result<StretchedKey> {
    if streams == 0 {
        return Err(BloatError::invalid(
            "streams",
            0,
            "multibloat needs at least one stream",
        ));
    }
    if iterations == 0 {
        return Err(BloatError::invalid(
            "iterations",
            0,
            "bloat needs at least one iteration",
        ));
    }
    let digest_size = ensure_compatible::<H>()?;
    let joined_len = streams.checked_mul(digest_size).ok_or_else(|| {
        BloatError::invalid("streams", streams as u64, "combined digests overflow usize")
    })?;

    debug!(iterations, streams, ?workers, digest_size, "multibloat start");

    let digests = run_streams::<H>(key, iterations, streams, workers)?;

    let mut joined = BytesMut::with_capacity(joined_len);
    for digest in &digests {
        joined.put_slice(digest.as_bytes());
    }
    let combined = StretchedKey::from_hasher(&H::with_seed(&joined));
    joined[..].zeroize();

    debug!(streams, "multibloat done");
    Ok(combined)
}

fn run_stream<H: ChainHasher>(key: &[u8], iterations: usize, index: usize) -> Result<StretchedKey> {
    let sub_key = Zeroizing::new(derive_stream_key::<H>(key, index));
    let digest = bloat::<H>(&sub_key, iterations)?;
    trace!(index, "stream done");
    Ok(digest)
}

#[cfg(feature = "parallel")]
fn run_streams<H: ChainHasher>(
    key: &[u8],
    iterations: usize,
    streams: usize,
    workers: Option<usize>,
) -> Result<Vec<StretchedKey>> {
    use rayon::prelude::*;

    // Indexed collect keeps results in stream order.
    let run = || {
        (0..streams)
            .into_par_iter()
            .map(|index| run_stream::<H>(key, iterations, index))
            .collect::<Result<Vec<_>>>()
    };

    match workers {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("keybloat-{i}"))
                .build()
                .map_err(|e| BloatError::ThreadPool(e.to_string()))?;
            pool.install(run)
        }
        None => run(),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_streams<H: ChainHasher>(
    key: &[u8],
    iterations: usize,
    streams: usize,
    _workers: Option<usize>,
) -> Result<Vec<StretchedKey>> {
    (0..streams)
        .map(|index| run_stream::<H>(key, iterations, index))
        .collect()
}
