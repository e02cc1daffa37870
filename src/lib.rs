//! # Circular FIFO
//!
//! A fixed-capacity circular (ring) buffer with first-in-first-out reads,
//! overwrite-on-full writes and explicit full/empty tracking.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `buffer`: The ring buffer, its thread-safe wrapper and state views
//! - `console`: Interactive command loop driving a buffer
//! - `config`: Buffer and console configuration
//! - `error`: Error types
//!
//! ## Quick Start
//!
//! ```
//! use circular_fifo::{BufferError, RingBuffer};
//!
//! let mut buffer = RingBuffer::new(3).unwrap();
//! buffer.write(1);
//! buffer.write(2);
//! buffer.write(3);
//! buffer.write(4); // full: 1 is overwritten
//!
//! assert_eq!(buffer.read(), Ok(2));
//! assert_eq!(buffer.len(), 2);
//!
//! buffer.reset();
//! assert_eq!(buffer.read(), Err(BufferError::Empty));
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod console;
pub mod error;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{BufferInfo, BufferSnapshot, BufferStats, RingBuffer, SharedRingBuffer, Value};
pub use config::Config;
pub use console::{Command, Console};
pub use error::{BufferError, CommandError, ConfigError, FifoError, FifoResult};

use log::LevelFilter;

// ============================================
// LOGGING
// ============================================

/// Initialize logging at the given level.
///
/// `RUST_LOG` overrides `level` when set. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

// ============================================
// TESTS
// ============================================
