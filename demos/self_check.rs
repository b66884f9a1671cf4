//! Runs the recorded SHA-512 vectors.
//!
//! Run with:
//!     cargo run --example self_check

use keybloat::{VECTORS, check_vector};

fn main() {
    tracing_subscriber::fmt::init();

    let mut failed = 0;
    for vector in &VECTORS {
        match check_vector(vector) {
            Ok(()) => println!("ok    {}", vector.name),
            Err(e) => {
                failed += 1;
                println!("FAIL  {}: {}", vector.name, e);
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
    println!("\nAll {} vectors passed", VECTORS.len());
}
