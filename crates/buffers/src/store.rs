//! Shared backing store for buffer views.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::Element;

/// A fixed-size, reference-counted element array.
///
/// Cloning a `SharedArray` clones the handle, not the elements: every clone
/// and every buffer view built over it reads and writes the same memory.
/// Elements sit in [`Cell`]s, so writes go through `&self`; the store is
/// neither `Send` nor `Sync`, which keeps all of its aliases on one thread.
///
/// # Example
///
/// ```
/// use nio_buffers::SharedArray;
///
/// let array = SharedArray::from(vec![1, 2, 3]);
/// let alias = array.clone();
/// alias.set(0, 9);
/// assert_eq!(array.to_vec(), vec![9, 2, 3]);
/// ```
pub struct SharedArray<T: Element> {
    cells: Rc<[Cell<T>]>,
}

impl<T: Element> SharedArray<T> {
    /// Allocates `len` zero-valued elements.
    pub fn new(len: usize) -> Self {
        Self {
            cells: (0..len).map(|_| Cell::new(T::default())).collect(),
        }
    }

    /// Copies `values` into a fresh store.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            cells: values.iter().copied().map(Cell::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads the element at `index`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.cells[index].get()
    }

    /// Writes the element at `index`. Panics if out of bounds.
    #[inline]
    pub fn set(&self, index: usize, value: T) {
        self.cells[index].set(value);
    }

    /// Copies the whole store into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().map(Cell::get).collect()
    }

    /// Returns `true` when both handles refer to the same memory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    /// Number of handles (arrays and views) keeping the store alive.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.cells)
    }

    /// Copies `count` elements from `src` to `dst`, both absolute indices.
    ///
    /// Overlapping ranges are handled by choosing the copy direction.
    pub(crate) fn copy_within(&self, src: usize, dst: usize, count: usize) {
        if dst <= src {
            for i in 0..count {
                self.set(dst + i, self.get(src + i));
            }
        } else {
            for i in (0..count).rev() {
                self.set(dst + i, self.get(src + i));
            }
        }
    }
}

impl<T: Element> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T: Element> From<Vec<T>> for SharedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            cells: values.into_iter().map(Cell::new).collect(),
        }
    }
}

impl<T: Element> From<&[T]> for SharedArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Element> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}
