//! # Circular FIFO Console
//!
//! Interactive loop over stdin/stdout. Type `h` for the command list.
//!
//! Run with: `cargo run --example console [capacity]`

use std::env;
use std::io;

use anyhow::{Context, Result};
use circular_fifo::console::HELP;
use circular_fifo::{Config, Console};

fn main() -> Result<()> {
    let mut config = Config::debug();
    if let Some(arg) = env::args().nth(1) {
        config.capacity = arg
            .parse()
            .with_context(|| format!("invalid capacity '{}'", arg))?;
    }

    circular_fifo::init_logging(config.log_level);

    println!("Circular FIFO console ({} slots)", config.capacity);
    println!("{}", HELP);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::with_config(&config, stdin.lock(), stdout.lock())?;
    let stats = console.run()?;

    println!();
    println!(
        "Bye! {} writes, {} reads, {} evictions",
        stats.writes, stats.reads, stats.evictions
    );
    Ok(())
}
