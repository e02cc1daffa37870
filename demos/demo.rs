//! # Circular FIFO Demo
//!
//! This example walks a 5-slot buffer through filling, reading,
//! overwriting and resetting, printing the state after each step.
//!
//! Run with: `cargo run --example demo`

use anyhow::Result;
use circular_fifo::{Config, SharedRingBuffer};

fn main() -> Result<()> {
    let config = Config::default();

    // Initialize logging so we can see what's happening
    circular_fifo::init_logging(config.log_level);

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Circular FIFO Demo                               ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Fill a 5-slot buffer, read once, overwrite, then reset.    ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let buffer = SharedRingBuffer::with_config(&config)?;

    println!("📦 Writing 1 five times...");
    for _ in 0..buffer.capacity() {
        buffer.write(1);
    }
    print_state(&buffer);

    println!("📤 Reading once...");
    let value = buffer.read()?;
    println!("   Got: {}", value);
    print_state(&buffer);

    println!("♻️  Writing 2..=7 (the last ones overwrite the oldest)...");
    for value in 2..=7 {
        if let Some(evicted) = buffer.write(value) {
            println!("   {} overwrote {}", value, evicted);
        }
    }
    println!("   Queued (oldest first): {:?}", buffer.to_vec());
    print_state(&buffer);

    println!("🧹 Resetting...");
    buffer.reset();
    print_state(&buffer);

    println!("📤 Reading from the empty buffer...");
    match buffer.read() {
        Ok(value) => println!("   Unexpected value: {}", value),
        Err(err) => println!("   Refused: {}", err),
    }
    println!();

    // Show results
    println!("📊 Final Statistics:");
    let stats = buffer.stats();
    println!("   Writes: {}", stats.writes);
    println!("   Reads: {}", stats.reads);
    println!("   Evictions: {}", stats.evictions);
    println!("   Empty reads: {}", stats.empty_reads);
    println!("   Resets: {}", stats.resets);
    println!();

    println!("👋 Demo complete!");
    Ok(())
}

/// Prints the state dump with a little indentation.
fn print_state(buffer: &SharedRingBuffer) {
    for line in buffer.snapshot().to_string().lines() {
        println!("   {}", line);
    }
    println!();
}
