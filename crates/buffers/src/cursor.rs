//! Capacity/position/limit/mark bookkeeping shared by every buffer view.

use crate::error::{BufferError, Result};

/// The cursor state of a buffer view.
///
/// A cursor owns no storage. It tracks four numbers and keeps them ordered:
/// `mark <= position <= limit <= capacity`, with the mark optional.
///
/// # Example
///
/// ```
/// use nio_buffers::Cursor;
///
/// let mut cursor = Cursor::new(8);
/// cursor.set_position(5).unwrap();
/// cursor.flip();
/// assert_eq!((cursor.position(), cursor.limit()), (0, 5));
/// assert_eq!(cursor.remaining(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    capacity: usize,
    position: usize,
    limit: usize,
    mark: Option<usize>,
}

impl Cursor {
    /// Creates a cursor with `position = 0` and `limit = capacity`.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            position: 0,
            limit: capacity,
            mark: None,
        }
    }

    /// Creates a cursor with explicit bounds.
    ///
    /// Callers validate user input first; `position <= limit <= capacity`
    /// is only asserted in debug builds.
    pub(crate) fn with_bounds(capacity: usize, position: usize, limit: usize) -> Self {
        let cursor = Self {
            capacity,
            position,
            limit,
            mark: None,
        };
        cursor.check_invariants();
        cursor
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the saved mark, if any.
    pub const fn mark_value(&self) -> Option<usize> {
        self.mark
    }

    /// Moves the position. A mark beyond the new position is discarded.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.limit {
            return Err(BufferError::IndexOutOfRange {
                what: "position",
                index: position,
                bound: self.limit,
            });
        }
        self.position = position;
        if self.mark.is_some_and(|mark| mark > position) {
            self.mark = None;
        }
        self.check_invariants();
        Ok(())
    }

    /// Moves the limit, clamping the position and discarding a mark that
    /// falls beyond it.
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.capacity {
            return Err(BufferError::IndexOutOfRange {
                what: "limit",
                index: limit,
                bound: self.capacity,
            });
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if self.mark.is_some_and(|mark| mark > limit) {
            self.mark = None;
        }
        self.check_invariants();
        Ok(())
    }

    /// Saves the current position.
    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Restores the position saved by [`mark`](Self::mark).
    pub fn reset(&mut self) -> Result<()> {
        let mark = self.mark.ok_or(BufferError::InvalidMark)?;
        self.position = mark;
        self.check_invariants();
        Ok(())
    }

    /// Prepares for a fresh sequence of relative writes.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Turns "just wrote N elements" into "ready to read N elements".
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    /// Restarts reading of the already delimited region.
    pub fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    pub const fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub const fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Validates an absolute index against the limit.
    pub(crate) fn check_index(&self, index: usize) -> Result<usize> {
        if index >= self.limit {
            return Err(BufferError::IndexOutOfRange {
                what: "index",
                index,
                bound: self.limit,
            });
        }
        Ok(index)
    }

    /// Claims `count` elements for a relative read and returns the first index.
    pub(crate) fn advance_get(&mut self, count: usize) -> Result<usize> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BufferError::BufferUnderflow {
                requested: count,
                remaining,
            });
        }
        Ok(self.advance_unchecked(count))
    }

    /// Claims `count` elements for a relative write and returns the first index.
    pub(crate) fn advance_put(&mut self, count: usize) -> Result<usize> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BufferError::BufferOverflow {
                requested: count,
                remaining,
            });
        }
        Ok(self.advance_unchecked(count))
    }

    fn advance_unchecked(&mut self, count: usize) -> usize {
        let start = self.position;
        self.position += count;
        self.check_invariants();
        start
    }

    /// Sets the state left behind by a compaction of `moved` elements.
    pub(crate) fn compacted(&mut self, moved: usize) {
        self.position = moved;
        self.limit = self.capacity;
        self.mark = None;
        self.check_invariants();
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(
            self.position <= self.limit && self.limit <= self.capacity,
            "cursor invariant broken: position {} limit {} capacity {}",
            self.position,
            self.limit,
            self.capacity
        );
        debug_assert!(
            self.mark.map_or(true, |mark| mark <= self.position),
            "cursor invariant broken: mark {:?} beyond position {}",
            self.mark,
            self.position
        );
    }
}
