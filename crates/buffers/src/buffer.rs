//! Array-backed buffer views.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::cmp::{cmp_iter, eq_iter};
use crate::error::{check_range, BufferError, Result};
use crate::{Cursor, Element, SharedArray};

/// Whether a view may mutate its backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

/// A bounded, cursor-tracked view over a [`SharedArray`].
///
/// The view addresses `capacity` elements of its store starting at a base
/// offset. Relative operations (`get`, `put`, the bulk forms) work at the
/// position and advance it; absolute operations (`get_at`, `put_at`) take an
/// index below the limit and leave the cursor alone.
///
/// Views derived with [`duplicate`](Self::duplicate),
/// [`slice`](Self::slice) and
/// [`as_read_only_buffer`](Self::as_read_only_buffer) share the store, so a
/// write through one is visible through all of them, while each keeps its
/// own cursor.
///
/// # Example
///
/// ```
/// use nio_buffers::IntBuffer;
///
/// let mut buffer = IntBuffer::allocate(10);
/// for i in 0..5 {
///     buffer.put(i).unwrap();
/// }
/// buffer.flip();
/// assert_eq!(buffer.remaining(), 5);
///
/// let mut read = Vec::new();
/// while buffer.has_remaining() {
///     read.push(buffer.get().unwrap());
/// }
/// assert_eq!(read, vec![0, 1, 2, 3, 4]);
/// ```
pub struct ArrayBuffer<T: Element> {
    cursor: Cursor,
    store: SharedArray<T>,
    offset: usize,
    mode: AccessMode,
}

pub type ByteBuffer = ArrayBuffer<u8>;
pub type CharBuffer = ArrayBuffer<char>;
pub type ShortBuffer = ArrayBuffer<i16>;
pub type IntBuffer = ArrayBuffer<i32>;
pub type LongBuffer = ArrayBuffer<i64>;
pub type FloatBuffer = ArrayBuffer<f32>;
pub type DoubleBuffer = ArrayBuffer<f64>;

impl<T: Element> ArrayBuffer<T> {
    /// Allocates a read-write buffer over a fresh zero-filled store.
    pub fn allocate(capacity: usize) -> Self {
        trace!(element = T::NAME, capacity, "allocate buffer");
        Self::from_parts(
            Cursor::new(capacity),
            SharedArray::new(capacity),
            0,
            AccessMode::ReadWrite,
        )
    }

    /// Wraps `array` without copying it.
    ///
    /// The view spans the whole array (`capacity == array.len()`) with
    /// `position = offset` and `limit = offset + length`.
    pub fn wrap(array: &SharedArray<T>, offset: usize, length: usize) -> Result<Self> {
        check_range(array.len(), offset, length)?;
        trace!(
            element = T::NAME,
            capacity = array.len(),
            offset,
            length,
            "wrap array"
        );
        Ok(Self::from_parts(
            Cursor::with_bounds(array.len(), offset, offset + length),
            array.clone(),
            0,
            AccessMode::ReadWrite,
        ))
    }

    /// Wraps the whole of `array`.
    pub fn wrap_all(array: &SharedArray<T>) -> Self {
        trace!(element = T::NAME, capacity = array.len(), "wrap array");
        Self::from_parts(
            Cursor::new(array.len()),
            array.clone(),
            0,
            AccessMode::ReadWrite,
        )
    }

    pub(crate) fn from_parts(
        cursor: Cursor,
        store: SharedArray<T>,
        offset: usize,
        mode: AccessMode,
    ) -> Self {
        assert!(
            offset <= store.len() && cursor.capacity() <= store.len() - offset,
            "view [{offset}, +{}) exceeds store of {}",
            cursor.capacity(),
            store.len()
        );
        Self {
            cursor,
            store,
            offset,
            mode,
        }
    }

    fn derive_view(
        &self,
        op: &'static str,
        cursor: Cursor,
        offset: usize,
        mode: AccessMode,
    ) -> Self {
        trace!(
            element = T::NAME,
            op,
            capacity = cursor.capacity(),
            position = cursor.position(),
            limit = cursor.limit(),
            offset,
            read_only = mode == AccessMode::ReadOnly,
            "derive view"
        );
        Self::from_parts(cursor, self.store.clone(), offset, mode)
    }

    // -----------------------------------------------------------------------
    // Cursor state
    // -----------------------------------------------------------------------

    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn limit(&self) -> usize {
        self.cursor.limit()
    }

    pub fn mark_value(&self) -> Option<usize> {
        self.cursor.mark_value()
    }

    /// Returns a copy of the cursor state.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_position(&mut self, position: usize) -> Result<&mut Self> {
        self.cursor.set_position(position)?;
        Ok(self)
    }

    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self> {
        self.cursor.set_limit(limit)?;
        Ok(self)
    }

    pub fn mark(&mut self) -> &mut Self {
        self.cursor.mark();
        self
    }

    pub fn reset(&mut self) -> Result<&mut Self> {
        self.cursor.reset()?;
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.cursor.clear();
        self
    }

    pub fn flip(&mut self) -> &mut Self {
        self.cursor.flip();
        self
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.rewind();
        self
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn has_remaining(&self) -> bool {
        self.cursor.has_remaining()
    }

    // -----------------------------------------------------------------------
    // Access mode and backing array
    // -----------------------------------------------------------------------

    pub fn access_mode(&self) -> AccessMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == AccessMode::ReadOnly
    }

    /// Returns `true` if [`array`](Self::array) is accessible.
    pub fn has_array(&self) -> bool {
        !self.is_read_only()
    }

    /// Returns the backing store. Fails on read-only views.
    pub fn array(&self) -> Result<&SharedArray<T>> {
        self.check_writable("array")?;
        Ok(&self.store)
    }

    /// Index of this view's element 0 within [`array`](Self::array).
    pub fn array_offset(&self) -> Result<usize> {
        self.check_writable("array_offset")?;
        Ok(self.offset)
    }

    pub(crate) fn check_writable(&self, op: &'static str) -> Result<()> {
        if self.is_read_only() {
            debug!(element = T::NAME, op, "rejected on read-only buffer");
            return Err(BufferError::ReadOnly);
        }
        Ok(())
    }

    #[inline]
    fn load(&self, index: usize) -> T {
        self.store.get(self.offset + index)
    }

    #[inline]
    fn store_at(&self, index: usize, value: T) {
        self.store.set(self.offset + index, value);
    }

    // -----------------------------------------------------------------------
    // Element access
    // -----------------------------------------------------------------------

    /// Reads the element at the position and advances it.
    pub fn get(&mut self) -> Result<T> {
        let index = self.cursor.advance_get(1)?;
        Ok(self.load(index))
    }

    /// Reads the element at `index` (below the limit).
    pub fn get_at(&self, index: usize) -> Result<T> {
        let index = self.cursor.check_index(index)?;
        Ok(self.load(index))
    }

    /// Writes `value` at the position and advances it.
    pub fn put(&mut self, value: T) -> Result<&mut Self> {
        self.check_writable("put")?;
        let index = self.cursor.advance_put(1)?;
        self.store_at(index, value);
        Ok(self)
    }

    /// Writes `value` at `index` (below the limit).
    pub fn put_at(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.check_writable("put_at")?;
        let index = self.cursor.check_index(index)?;
        self.store_at(index, value);
        Ok(self)
    }

    /// Fills `dst` from the position, advancing by `dst.len()`.
    ///
    /// Fails with [`BufferError::BufferUnderflow`] without copying anything
    /// when fewer than `dst.len()` elements remain.
    pub fn get_into(&mut self, dst: &mut [T]) -> Result<&mut Self> {
        let start = self.cursor.advance_get(dst.len())?;
        for (i, slot) in dst.iter_mut().enumerate() {
            *slot = self.load(start + i);
        }
        Ok(self)
    }

    /// Fills `dst[offset..offset + length]` from the position.
    pub fn get_range(&mut self, dst: &mut [T], offset: usize, length: usize) -> Result<&mut Self> {
        check_range(dst.len(), offset, length)?;
        self.get_into(&mut dst[offset..offset + length])
    }

    /// Writes all of `src` at the position, advancing by `src.len()`.
    ///
    /// Fails with [`BufferError::BufferOverflow`] without copying anything
    /// when fewer than `src.len()` elements remain.
    pub fn put_from(&mut self, src: &[T]) -> Result<&mut Self> {
        self.check_writable("put_from")?;
        let start = self.cursor.advance_put(src.len())?;
        for (i, value) in src.iter().enumerate() {
            self.store_at(start + i, *value);
        }
        Ok(self)
    }

    /// Writes `src[offset..offset + length]` at the position.
    pub fn put_range(&mut self, src: &[T], offset: usize, length: usize) -> Result<&mut Self> {
        self.check_writable("put_range")?;
        check_range(src.len(), offset, length)?;
        self.put_from(&src[offset..offset + length])
    }

    /// Transfers all remaining elements of `src` into this buffer.
    ///
    /// Both positions advance by `src.remaining()`. The buffers may share a
    /// store; the source region is read in full before anything is written.
    pub fn put_buffer(&mut self, src: &mut ArrayBuffer<T>) -> Result<&mut Self> {
        self.check_writable("put_buffer")?;
        let requested = src.remaining();
        let remaining = self.remaining();
        if requested > remaining {
            return Err(BufferError::BufferOverflow {
                requested,
                remaining,
            });
        }
        let mut values = vec![T::default(); requested];
        src.get_into(&mut values)?;
        self.put_from(&values)
    }

    /// Iterates the remaining elements without moving the position.
    pub fn remaining_iter(&self) -> impl Iterator<Item = T> + '_ {
        (self.position()..self.limit()).map(move |index| self.load(index))
    }

    /// Copies the remaining elements into a `Vec`.
    pub fn remaining_to_vec(&self) -> Vec<T> {
        self.remaining_iter().collect()
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// A view with the same store, cursor state and access mode.
    pub fn duplicate(&self) -> Self {
        self.derive_view("duplicate", self.cursor, self.offset, self.mode)
    }

    /// A zero-based view over exactly the remaining region.
    pub fn slice(&self) -> Self {
        self.derive_view(
            "slice",
            Cursor::new(self.remaining()),
            self.offset + self.position(),
            self.mode,
        )
    }

    /// A read-only duplicate. On a read-only view this is `duplicate`.
    pub fn as_read_only_buffer(&self) -> Self {
        self.derive_view(
            "as_read_only_buffer",
            self.cursor,
            self.offset,
            AccessMode::ReadOnly,
        )
    }

    /// Moves the remaining elements to the front of the view.
    ///
    /// Afterwards the position is the number of elements moved and the limit
    /// is the capacity, ready for further writes.
    pub fn compact(&mut self) -> Result<&mut Self> {
        self.check_writable("compact")?;
        let moved = self.remaining();
        self.store
            .copy_within(self.offset + self.position(), self.offset, moved);
        self.cursor.compacted(moved);
        trace!(element = T::NAME, moved, "compact buffer");
        Ok(self)
    }
}

/// Cloning a view is [`ArrayBuffer::duplicate`]: the store is shared.
impl<T: Element> Clone for ArrayBuffer<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: Element> From<Vec<T>> for ArrayBuffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self::wrap_all(&SharedArray::from(values))
    }
}

/// Buffers are equal when their remaining elements are equal.
impl<T: Element> PartialEq for ArrayBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
            && eq_iter(self.remaining_iter(), other.remaining_iter())
    }
}

impl<T: Element> Eq for ArrayBuffer<T> {}

impl<T: Element> PartialOrd for ArrayBuffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic order of the remaining elements.
impl<T: Element> Ord for ArrayBuffer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_iter(self.remaining_iter(), other.remaining_iter())
    }
}

impl<T: Element> Hash for ArrayBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.remaining());
        for value in self.remaining_iter() {
            value.element_hash(state);
        }
    }
}

impl<T: Element> fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("element", &T::NAME)
            .field("position", &self.position())
            .field("limit", &self.limit())
            .field("capacity", &self.capacity())
            .field("mark", &self.mark_value())
            .field("mode", &self.mode)
            .finish()
    }
}
