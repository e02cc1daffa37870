//! # Ring Buffer Implementation
//!
//! A fixed-size circular buffer that overwrites old elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! `head` points at the spot the next car parks in, `tail` points at the
//! car that leaves next. When every spot is taken and a new car arrives,
//! the car at `tail` is towed away to make room.
//!
//! ## Full vs. Empty
//!
//! Both a completely empty and a completely full buffer end up with
//! `head == tail`. We keep an explicit `is_full` flag and a `count` to
//! tell them apart instead of leaving one slot unused, so a buffer of
//! capacity `N` really holds `N` values.

use crate::config::MAX_CAPACITY;
use crate::error::BufferError;

use super::snapshot::BufferInfo;

/// The value type stored in each slot
pub type Value = i32;

/// A fixed-capacity FIFO ring buffer with overwrite-on-full.
///
/// ## Properties
/// - Fixed capacity (doesn't grow)
/// - O(1) `write`, `read` and `reset` bookkeeping
/// - `write` never fails; when full it evicts the oldest value
/// - `read` on an empty buffer fails without touching any state
#[derive(Debug, Clone)]
pub struct RingBuffer {
    /// One slot per position, `None` = empty
    slots: Box<[Option<Value>]>,

    /// Where the next write goes
    head: usize,

    /// Where the next read comes from
    tail: usize,

    /// Number of unread values
    count: usize,

    /// `count == capacity`; disambiguates `head == tail`
    is_full: bool,

    /// Wipe a slot once it has been read
    clear_on_read: bool,
}

impl RingBuffer {
    /// Creates a new ring buffer with the given capacity.
    ///
    /// Consumed slots are cleared on read. Fails with
    /// [`BufferError::ZeroCapacity`] if `capacity` is 0 and with
    /// [`BufferError::CapacityTooLarge`] above [`MAX_CAPACITY`].
    ///
    /// ## Example
    /// ```
    /// # use circular_fifo::buffer::RingBuffer;
    /// let buffer = RingBuffer::new(100).unwrap();
    /// assert_eq!(buffer.capacity(), 100);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Self::with_slot_clearing(capacity, true)
    }

    /// Creates a new ring buffer, choosing whether `read` clears the slot.
    pub fn with_slot_clearing(capacity: usize, clear_on_read: bool) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(BufferError::CapacityTooLarge(capacity));
        }

        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
            is_full: false,
            clear_on_read,
        })
    }

    /// Next position after `index`, wrapping at the end.
    #[inline]
    fn advance(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.slots.len() {
            0
        } else {
            next
        }
    }

    /// Stores a value, evicting the oldest one if the buffer is full.
    ///
    /// ## Step Order
    ///
    /// 1. Put the value in the `head` slot
    /// 2. If we were already full, the oldest value just got overwritten,
    ///    so move `tail` past it
    /// 3. Move `head`
    /// 4. `head` catching up with `tail` after a write can only mean full
    /// 5. Bump `count`, capped at capacity
    pub fn write(&mut self, value: Value) {
        self.slots[self.head] = Some(value);

        if self.is_full {
            self.tail = self.advance(self.tail);
        }

        self.head = self.advance(self.head);
        self.is_full = self.head == self.tail;
        self.count = (self.count + 1).min(self.capacity());
    }

    /// Removes and returns the oldest value.
    ///
    /// Returns [`BufferError::Empty`] if nothing is stored; the buffer is
    /// left exactly as it was. [`BufferError::MissingSlot`] means the
    /// `[tail, head)` bookkeeping is broken and also leaves state untouched.
    pub fn read(&mut self) -> Result<Value, BufferError> {
        if self.count == 0 {
            return Err(BufferError::Empty);
        }

        // Slots in [tail, head) always hold a value
        let value = self.slots[self.tail].ok_or(BufferError::MissingSlot(self.tail))?;

        if self.clear_on_read {
            self.slots[self.tail] = None;
        }

        self.tail = self.advance(self.tail);
        self.is_full = false;
        self.count = self.count.saturating_sub(1);

        Ok(value)
    }

    /// Discards everything and returns to the initial empty state.
    ///
    /// Capacity is unchanged.
    pub fn reset(&mut self) {
        self.slots.fill(None);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        self.is_full = false;
    }

    /// Read-only view of the indices, flags and slots.
    pub fn info(&self) -> BufferInfo<'_> {
        BufferInfo {
            head: self.head,
            tail: self.tail,
            count: self.count,
            is_full: self.is_full,
            slots: &self.slots,
        }
    }

    /// Returns the number of values currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// Returns true if the next `write` will overwrite an unread value.
    pub fn will_evict(&self) -> bool {
        self.is_full
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the next write.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the next read.
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns the oldest value without removing it.
    pub fn peek_oldest(&self) -> Option<Value> {
        self.info().peek_oldest()
    }

    /// Returns the newest value without removing it.
    pub fn peek_newest(&self) -> Option<Value> {
        self.info().peek_newest()
    }

    /// Returns an iterator over the queued values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        let capacity = self.capacity();
        (0..self.count).filter_map(move |offset| self.slots[(self.tail + offset) % capacity])
    }

    /// Returns the queued values as a Vec (oldest first).
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }
}

impl Extend<Value> for RingBuffer {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.write(value);
        }
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buffer = RingBuffer::new(5).unwrap();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert!(buffer.info().slots.iter().all(Option::is_none));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(RingBuffer::new(0).unwrap_err(), BufferError::ZeroCapacity);
    }

    #[test]
    fn test_huge_capacity_rejected() {
        assert_eq!(
            RingBuffer::new(usize::MAX).unwrap_err(),
            BufferError::CapacityTooLarge(usize::MAX)
        );
        assert_eq!(
            RingBuffer::with_slot_clearing(MAX_CAPACITY + 1, false).unwrap_err(),
            BufferError::CapacityTooLarge(MAX_CAPACITY + 1)
        );
        assert_eq!(RingBuffer::new(MAX_CAPACITY).unwrap().capacity(), MAX_CAPACITY);
    }

    #[test]
    fn test_write_single() {
        let mut buffer = RingBuffer::new(5).unwrap();
        buffer.write(42);

        assert!(!buffer.is_empty());
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.head(), 1);
        assert_eq!(buffer.tail(), 0);
        assert_eq!(buffer.peek_newest(), Some(42));
        assert_eq!(buffer.peek_oldest(), Some(42));
    }

    #[test]
    fn test_fill_then_read_one() {
        let mut buffer = RingBuffer::new(5).unwrap();
        for _ in 0..5 {
            buffer.write(1);
        }

        assert_eq!(buffer.len(), 5);
        assert!(buffer.is_full());
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);

        assert_eq!(buffer.read(), Ok(1));
        assert_eq!(buffer.len(), 4);
        assert!(!buffer.is_full());
        assert_eq!(buffer.tail(), 1);

        buffer.reset();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut buffer = RingBuffer::new(5).unwrap();
        buffer.extend(1..=6);

        assert!(buffer.is_full());
        assert_eq!(buffer.head(), 1);
        assert_eq!(buffer.tail(), 1);
        assert_eq!(buffer.to_vec(), vec![2, 3, 4, 5, 6]);

        assert_eq!(buffer.read(), Ok(2));
        for expected in 3..=6 {
            assert_eq!(buffer.read(), Ok(expected));
        }
        assert!(buffer.is_empty());
        assert_eq!(buffer.read(), Err(BufferError::Empty));
    }

    #[test]
    fn test_empty_read_leaves_state_untouched() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.extend([7, 8]);
        buffer.read().unwrap();
        buffer.read().unwrap();

        let before = buffer.info().to_snapshot();
        assert_eq!(buffer.read(), Err(BufferError::Empty));
        assert_eq!(buffer.info().to_snapshot(), before);
        assert_eq!(buffer.head(), 2);
        assert_eq!(buffer.tail(), 2);
    }

    #[test]
    fn test_missing_slot_is_not_reported_as_empty() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.extend([1, 2]);

        // Break the [tail, head) bookkeeping by hand
        buffer.slots[buffer.tail] = None;

        assert_eq!(buffer.read(), Err(BufferError::MissingSlot(0)));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.tail(), 0);
    }

    #[test]
    fn test_head_equals_tail_is_disambiguated() {
        let mut buffer = RingBuffer::new(2).unwrap();
        assert_eq!(buffer.head(), buffer.tail());
        assert!(buffer.is_empty());

        buffer.extend([1, 2]);
        assert_eq!(buffer.head(), buffer.tail());
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_wraparound_interleaved() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.extend([1, 2]);
        assert_eq!(buffer.read(), Ok(1));
        buffer.extend([3, 4]);

        // head wrapped to 1, tail is at 1 -> full
        assert!(buffer.is_full());
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
        assert_eq!(buffer.peek_oldest(), Some(2));
        assert_eq!(buffer.peek_newest(), Some(4));
    }

    #[test]
    fn test_capacity_one() {
        let mut buffer = RingBuffer::new(1).unwrap();
        buffer.write(1);
        assert!(buffer.is_full());
        buffer.write(2);
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.read(), Ok(2));
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_read_clears_slot() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.write(9);
        buffer.read().unwrap();
        assert_eq!(buffer.info().slots[0], None);
    }

    #[test]
    fn test_read_without_clearing() {
        let mut buffer = RingBuffer::with_slot_clearing(3, false).unwrap();
        buffer.write(9);
        assert_eq!(buffer.read(), Ok(9));

        // Stale value stays in the slot but is never handed out
        assert_eq!(buffer.info().slots[0], Some(9));
        assert_eq!(buffer.peek_oldest(), None);
        assert_eq!(buffer.peek_newest(), None);
        assert_eq!(buffer.read(), Err(BufferError::Empty));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut buffer = RingBuffer::new(4).unwrap();
        buffer.reset();
        assert!(buffer.is_empty());

        buffer.extend(0..10);
        buffer.reset();
        buffer.reset();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.capacity(), 4);
        assert!(buffer.info().slots.iter().all(Option::is_none));
        assert_eq!(buffer.read(), Err(BufferError::Empty));
    }

    #[test]
    fn test_iterator() {
        let mut buffer = RingBuffer::new(5).unwrap();
        buffer.extend(1..=3);

        let collected: Vec<_> = buffer.iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
