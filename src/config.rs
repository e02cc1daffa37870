//! # Configuration Module
//!
//! This module handles the configurable settings for a buffer and the
//! console wrapped around it.
//!
//! ## Plain English Explanation
//!
//! The buffer itself only needs one number: how many slots it has.
//! Everything else is about how much we log and how chatty the console is.
//!
//! Settings include:
//! - How many values the buffer holds
//! - Whether a read wipes the slot it consumed
//! - How much logging to show
//! - Whether the console prints the state after every change

use log::LevelFilter;
use thiserror::Error;

/// Largest capacity `validate` accepts (one million slots)
pub const MAX_CAPACITY: usize = 1 << 20;

/// Capacity used by the default configuration
pub const DEFAULT_CAPACITY: usize = 5;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for a buffer and its console
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // ----------------------------------------
    // BUFFER SETTINGS
    // "How much to remember"
    // ----------------------------------------

    /// Number of slots in the buffer
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Maximum: [`MAX_CAPACITY`]
    /// - Default: 5
    pub capacity: usize,

    /// Overwrite a slot with "empty" after reading it
    ///
    /// ## Plain English
    /// Purely cosmetic. Queued values are tracked by head, tail and count,
    /// so a stale slot is never handed out either way. Clearing just makes
    /// the state dump easier to follow.
    pub clear_on_read: bool,

    // ----------------------------------------
    // OUTPUT SETTINGS
    // "How much to tell the user"
    // ----------------------------------------

    /// Log level passed to [`crate::init_logging`]
    pub log_level: LevelFilter,

    /// Print the buffer state after every write, read and reset
    pub echo_state: bool,
}

impl Config {
    /// Creates a configuration with all default values
    pub fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            clear_on_read: true,
            log_level: LevelFilter::Info,
            echo_state: false,
        }
    }

    /// Creates a configuration for stepping through the index movement
    ///
    /// ## When to Use
    /// When you want to watch head and tail move on every command.
    pub fn debug() -> Self {
        Self {
            log_level: LevelFilter::Debug,
            echo_state: true,
            ..Self::default()
        }
    }

    /// Default configuration with a different capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            errors.push(ConfigError::CapacityTooLarge(self.capacity));
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Capacity of zero leaves nowhere to store anything
    #[error("Capacity must be at least 1")]
    ZeroCapacity,

    /// Capacity is larger than we are willing to allocate
    #[error("Capacity {0} is too large (maximum {max})", max = MAX_CAPACITY)]
    CapacityTooLarge(usize),
}

// ============================================
// TESTS
// ============================================
