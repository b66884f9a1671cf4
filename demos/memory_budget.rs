//! Sizing a run to a memory budget.
//!
//! Run with:
//!     cargo run --example memory_budget -- 64

use keybloat::{BloatConfig, Sha256Hasher, Sha512Hasher, Stretcher, memory_to_iterations};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Total budget in MiB, split across the available cores
    let budget_mib: u64 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(16);
    let streams = std::thread::available_parallelism()?.get();
    let per_stream = (budget_mib << 20) / streams as u64;

    println!("Budget: {} MiB over {} streams", budget_mib, streams);
    println!(
        "  SHA-256: {} iterations per stream",
        memory_to_iterations::<Sha256Hasher>(per_stream)
    );
    println!(
        "  SHA-512: {} iterations per stream\n",
        memory_to_iterations::<Sha512Hasher>(per_stream)
    );

    let config = BloatConfig::for_memory::<Sha512Hasher>(per_stream)?
        .with_streams(streams)
        .with_workers(streams);
    let stretcher = Stretcher::<Sha512Hasher>::new(config)?;

    println!(
        "Peak memory: {} bytes",
        stretcher.memory_required()?
    );
    let key = stretcher.multibloat(b"hunter2")?;
    println!("Stretched key: {}", key);

    Ok(())
}
