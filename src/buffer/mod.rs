//! # Buffer Module
//!
//! This module provides the circular (ring) buffer and a thread-safe
//! wrapper around it.
//!
//! ## Plain English Explanation
//!
//! Imagine a round table with exactly 5 seats and two pointers:
//! 1. `head` says where the next guest sits down
//! 2. `tail` says which guest leaves next
//! 3. If every seat is taken, the guest at `tail` is asked to leave first
//!
//! When both pointers land on the same seat the table is either empty or
//! full. The buffer keeps a separate "full" flag so it never has to guess.

mod ring_buffer;
mod snapshot;

pub use ring_buffer::{RingBuffer, Value};
pub use snapshot::{BufferInfo, BufferSnapshot};

use log::{debug, error, info, warn};
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{BufferError, FifoError, FifoResult};

// ============================================
// STATISTICS
// ============================================

/// Counters for every operation performed on a shared buffer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Total values written
    pub writes: u64,
    /// Total successful reads
    pub reads: u64,
    /// Writes that overwrote an unread value
    pub evictions: u64,
    /// Reads rejected because the buffer was empty
    pub empty_reads: u64,
    /// Total resets
    pub resets: u64,
}

// ============================================
// SHARED RING BUFFER
// Thread-safe wrapper for our ring buffer
// ============================================

/// Everything one lock guards
#[derive(Debug)]
struct State {
    ring: RingBuffer,
    stats: BufferStats,
}

/// A thread-safe ring buffer that can be shared across threads
///
/// ## Plain English Explanation
///
/// `write` and `read` each move several fields at once (slot, head, tail,
/// count, full flag). Another thread must never see half of that, so the
/// whole buffer sits behind ONE lock together with its counters.
///
/// - `write`, `read` and `reset` take the write lock
/// - Introspection (`snapshot`, `len`, `stats`, ...) takes the read lock
pub struct SharedRingBuffer {
    inner: RwLock<State>,

    /// Fixed at construction, so readable without the lock
    capacity: usize,
}

impl SharedRingBuffer {
    /// Creates a new shared buffer with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self::from_ring(RingBuffer::new(capacity)?))
    }

    /// Creates a shared buffer from a configuration
    ///
    /// The configuration is validated first; the first problem found is
    /// returned.
    pub fn with_config(config: &Config) -> FifoResult<Self> {
        if let Some(err) = config.validate().into_iter().next() {
            return Err(FifoError::Config(err));
        }

        let ring = RingBuffer::with_slot_clearing(config.capacity, config.clear_on_read)?;
        Ok(Self::from_ring(ring))
    }

    fn from_ring(ring: RingBuffer) -> Self {
        let capacity = ring.capacity();
        info!("Creating ring buffer with {} slots", capacity);

        Self {
            inner: RwLock::new(State {
                ring,
                stats: BufferStats::default(),
            }),
            capacity,
        }
    }

    /// Adds a value to the buffer
    ///
    /// Never fails. If the buffer was full, the oldest value is
    /// overwritten and returned so the caller knows what was lost.
    pub fn write(&self, value: Value) -> Option<Value> {
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let evicted = if state.ring.will_evict() {
            state.ring.peek_oldest()
        } else {
            None
        };

        state.ring.write(value);
        state.stats.writes += 1;

        if let Some(old) = evicted {
            state.stats.evictions += 1;
            debug!("Buffer full: {} overwrote {}", value, old);
        }

        evicted
    }

    /// Removes and returns the oldest value
    ///
    /// Fails with [`BufferError::Empty`] and leaves the buffer unchanged
    /// if there is nothing to read.
    pub fn read(&self) -> Result<Value, BufferError> {
        let mut guard = self.inner.write();
        let state = &mut *guard;

        match state.ring.read() {
            Ok(value) => {
                state.stats.reads += 1;
                Ok(value)
            }
            Err(BufferError::Empty) => {
                state.stats.empty_reads += 1;
                warn!("Rejected read: {}", BufferError::Empty);
                Err(BufferError::Empty)
            }
            Err(err) => {
                error!("Read failed: {}", err);
                Err(err)
            }
        }
    }

    /// Clears all values from the buffer
    pub fn reset(&self) {
        let mut guard = self.inner.write();
        let discarded = guard.ring.len();
        guard.ring.reset();
        guard.stats.resets += 1;

        info!("Buffer reset, discarded {} values", discarded);
    }

    /// Takes an owned copy of the current state
    ///
    /// The buffer is NOT modified.
    pub fn snapshot(&self) -> BufferSnapshot {
        self.inner.read().ring.info().to_snapshot()
    }

    /// Copies out the queued values (oldest first)
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.read().ring.to_vec()
    }

    /// Returns how full the buffer is (0.0 = empty, 1.0 = full)
    pub fn fill_ratio(&self) -> f32 {
        self.len() as f32 / self.capacity as f32
    }

    /// Returns the number of values currently stored
    pub fn len(&self) -> usize {
        self.inner.read().ring.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.inner.read().ring.is_empty()
    }

    /// Returns true if the next write will evict a value
    pub fn is_full(&self) -> bool {
        self.inner.read().ring.is_full()
    }

    /// Returns the number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a copy of the operation counters
    pub fn stats(&self) -> BufferStats {
        self.inner.read().stats
    }
}

// ============================================
// TESTS
// ============================================
