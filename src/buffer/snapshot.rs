//! # Buffer Introspection
//!
//! Read-only views of a ring buffer's state.
//!
//! [`BufferInfo`] borrows the slots straight out of a [`super::RingBuffer`];
//! [`BufferSnapshot`] owns a copy so it can leave a lock behind.

use std::fmt;

use super::ring_buffer::Value;

// ============================================
// BORROWED VIEW
// ============================================

/// Borrowed view of a buffer's indices, flags and slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferInfo<'a> {
    /// Index of the next write
    pub head: usize,
    /// Index of the next read
    pub tail: usize,
    /// Number of unread values
    pub count: usize,
    /// True exactly when `count == capacity`
    pub is_full: bool,
    /// Raw slots, including stale or cleared ones
    pub slots: &'a [Option<Value>],
}

impl<'a> BufferInfo<'a> {
    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Value at `tail`, the next one `read` returns.
    ///
    /// `None` when empty, whatever the slot happens to contain.
    pub fn peek_oldest(&self) -> Option<Value> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.tail]
    }

    /// Value just behind `head`, the most recent write.
    ///
    /// `None` when empty, whatever the slot happens to contain.
    pub fn peek_newest(&self) -> Option<Value> {
        if self.count == 0 {
            return None;
        }
        let newest = if self.head == 0 {
            self.capacity() - 1
        } else {
            self.head - 1
        };
        self.slots[newest]
    }

    /// Copies the view into an owned snapshot.
    pub fn to_snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            head: self.head,
            tail: self.tail,
            count: self.count,
            is_full: self.is_full,
            slots: self.slots.to_vec(),
        }
    }
}

/// Renders the state dump:
///
/// ```text
/// Head: 1
/// Tail: 0
/// Size: 1
/// Peak: 7
/// Bottom: 7
/// isFull: false
/// Buffer: 7 _ _
/// ```
impl fmt::Display for BufferInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Head: {}", self.head)?;
        writeln!(f, "Tail: {}", self.tail)?;
        writeln!(f, "Size: {}", self.count)?;
        writeln!(f, "Peak: {}", Slot(self.peek_newest(), "-"))?;
        writeln!(f, "Bottom: {}", Slot(self.peek_oldest(), "-"))?;
        writeln!(f, "isFull: {}", self.is_full)?;

        write!(f, "Buffer:")?;
        for slot in self.slots {
            write!(f, " {}", Slot(*slot, "_"))?;
        }
        Ok(())
    }
}

/// A slot value, or a placeholder when there isn't one.
struct Slot(Option<Value>, &'static str);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(self.1),
        }
    }
}

// ============================================
// OWNED SNAPSHOT
// ============================================

/// Owned copy of a buffer's state, taken at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    /// Index of the next write
    pub head: usize,
    /// Index of the next read
    pub tail: usize,
    /// Number of unread values
    pub count: usize,
    /// True exactly when `count == capacity`
    pub is_full: bool,
    /// Copy of the raw slots, including stale or cleared ones
    pub slots: Vec<Option<Value>>,
}

impl BufferSnapshot {
    /// Borrows the snapshot as a [`BufferInfo`].
    pub fn as_info(&self) -> BufferInfo<'_> {
        BufferInfo {
            head: self.head,
            tail: self.tail,
            count: self.count,
            is_full: self.is_full,
            slots: &self.slots,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Value the next `read` would have returned, `None` when empty.
    pub fn peek_oldest(&self) -> Option<Value> {
        self.as_info().peek_oldest()
    }

    /// Most recently written value, `None` when empty.
    pub fn peek_newest(&self) -> Option<Value> {
        self.as_info().peek_newest()
    }
}

impl fmt::Display for BufferSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_info(), f)
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RingBuffer;

    #[test]
    fn test_display_empty() {
        let buffer = RingBuffer::new(3).unwrap();
        let text = buffer.info().to_string();

        assert_eq!(
            text,
            "Head: 0\nTail: 0\nSize: 0\nPeak: -\nBottom: -\nisFull: false\nBuffer: _ _ _"
        );
    }

    #[test]
    fn test_display_partial() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.write(7);
        buffer.write(8);
        let text = buffer.info().to_string();

        assert!(text.contains("Head: 2"));
        assert!(text.contains("Peak: 8"));
        assert!(text.contains("Bottom: 7"));
        assert!(text.ends_with("Buffer: 7 8 _"));
    }

    #[test]
    fn test_peek_newest_wraps() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.extend([1, 2, 3]);

        let info = buffer.info();
        assert_eq!(info.head, 0);
        assert_eq!(info.peek_newest(), Some(3));
        assert_eq!(info.peek_oldest(), Some(1));
    }

    #[test]
    fn test_snapshot_matches_view() {
        let mut buffer = RingBuffer::new(4).unwrap();
        buffer.extend([5, 6]);

        let snapshot = buffer.info().to_snapshot();
        assert_eq!(snapshot.as_info(), buffer.info());
        assert_eq!(snapshot.capacity(), 4);
        assert_eq!(snapshot.to_string(), buffer.info().to_string());

        // Snapshot doesn't follow later changes
        buffer.write(7);
        assert_eq!(snapshot.count, 2);
    }

    #[test]
    fn test_snapshot_peeks() {
        let mut buffer = RingBuffer::with_slot_clearing(2, false).unwrap();
        buffer.extend([1, 2]);
        let full = buffer.info().to_snapshot();
        assert_eq!(full.peek_oldest(), Some(1));
        assert_eq!(full.peek_newest(), Some(2));

        buffer.read().unwrap();
        buffer.read().unwrap();
        let empty = buffer.info().to_snapshot();

        // Slots still hold stale values but the snapshot reports nothing queued
        assert_eq!(empty.slots, vec![Some(1), Some(2)]);
        assert_eq!(empty.peek_oldest(), None);
        assert_eq!(empty.peek_newest(), None);
    }
}
