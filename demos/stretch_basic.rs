//! Basic key stretching with each variant.
//!
//! Run with:
//!     RUST_LOG=debug cargo run --example stretch_basic

use std::time::Instant;

use keybloat::{Sha512Hasher, bloat, crazybloat, iterations_to_memory, multibloat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let password = b"correct horse battery staple";
    let iterations = 1 << 16;

    println!(
        "Stretching with {} iterations ({} KiB table per stream)...\n",
        iterations,
        iterations_to_memory::<Sha512Hasher>(iterations as u64)? / 1024
    );

    let start = Instant::now();
    let key = bloat::<Sha512Hasher>(password, iterations)?;
    println!("bloat:      {} ({:?})", &key.to_hex()[..32], start.elapsed());

    for streams in [2, 4] {
        let start = Instant::now();
        let key = multibloat::<Sha512Hasher>(password, iterations, streams)?;
        println!(
            "multibloat: {} ({} streams, {:?})",
            &key.to_hex()[..32],
            streams,
            start.elapsed()
        );
    }

    // The table-free variant explodes quickly; keep it tiny.
    for iterations in [8, 16, 20] {
        let start = Instant::now();
        let slow = crazybloat::<Sha512Hasher>(password, iterations)?;
        let fast = bloat::<Sha512Hasher>(password, iterations)?;
        println!(
            "crazybloat: {} iterations in {:?}, matches bloat: {}",
            iterations,
            start.elapsed(),
            slow == fast
        );
    }

    Ok(())
}
