//! # Error Types Module
//!
//! This module defines all the error types used throughout the crate.
//!
//! ## Plain English Explanation
//!
//! Only one buffer operation can actually fail: reading from an empty
//! buffer. Everything else here belongs to the pieces wrapped around the
//! buffer (configuration checks and the command console):
//!
//! - "BufferError: There is nothing to read"
//! - "ConfigError: A capacity of zero makes no sense"
//! - "CommandError: I don't know what `x` means"

use std::io;

use thiserror::Error;

pub use crate::config::ConfigError;
use crate::config::MAX_CAPACITY;

// ============================================
// MAIN ERROR
// ============================================

/// The top-level error type for the crate
///
/// ## Plain English
///
/// This is the "parent" error that can hold an error from any module.
/// Each variant wraps the module's own error so nothing is lost.
#[derive(Debug, Error)]
pub enum FifoError {
    /// Something went wrong inside the ring buffer
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// A configuration value was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A console command could not be understood
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Generic I/O error (console input/output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ============================================
// BUFFER ERRORS
// ============================================

/// Errors produced by the ring buffer itself
///
/// ## Plain English
///
/// A failed operation never changes the buffer. If `read` says the
/// buffer is empty, head, tail and count are exactly where they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// `read` was called while no values were stored
    #[error("Buffer is empty")]
    Empty,

    /// A buffer needs at least one slot
    #[error("Buffer capacity must be at least 1")]
    ZeroCapacity,

    /// Capacity is larger than we are willing to allocate
    #[error("Buffer capacity {0} is too large (maximum {max})", max = MAX_CAPACITY)]
    CapacityTooLarge(usize),

    /// A slot inside `[tail, head)` held no value
    ///
    /// Means the index bookkeeping is broken, not that the buffer is empty.
    #[error("Slot {0} should hold a queued value but is empty")]
    MissingSlot(usize),
}

// ============================================
// COMMAND ERRORS
// ============================================

/// Errors from parsing a console command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was blank
    #[error("No command given")]
    Empty,

    /// The first word doesn't name a command
    #[error("Unknown command '{0}' (type 'h' for help)")]
    Unknown(String),

    /// A command that takes no argument was given one
    #[error("Command '{command}' takes no argument (got '{argument}')")]
    UnexpectedArgument { command: String, argument: String },

    /// `w` was given without a value
    #[error("Missing value for write (usage: w <number>)")]
    MissingValue,

    /// The value after `w` isn't a valid number
    #[error("Invalid value '{0}' (expected an integer)")]
    InvalidValue(String),
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses FifoError
pub type FifoResult<T> = Result<T, FifoError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FifoError::Buffer(BufferError::Empty);
        let message = format!("{}", err);
        assert!(message.contains("Buffer"));
        assert!(message.contains("empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let app_err: FifoError = io_err.into();

        match app_err {
            FifoError::Io(_) => {} // Expected
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_command_error_conversion() {
        let err: FifoError = CommandError::Unknown("x".to_string()).into();
        assert!(matches!(err, FifoError::Command(CommandError::Unknown(_))));
        assert!(err.to_string().contains("'x'"));
    }
}
