//! Array-backed NIO-style buffers.
//!
//! A buffer is a bounded view over a fixed-size [`SharedArray`]: a capacity,
//! a position, a limit and an optional mark, with absolute and relative
//! element access, bulk transfer, and zero-copy derived views.
//!
//! # Overview
//!
//! - [`Cursor`] - Capacity/position/limit/mark state machine
//! - [`SharedArray`] - Reference-counted backing store shared by views
//! - [`ArrayBuffer`] - Generic buffer view, one instantiation per element type
//!   ([`ByteBuffer`], [`CharBuffer`], [`ShortBuffer`], [`IntBuffer`],
//!   [`LongBuffer`], [`FloatBuffer`], [`DoubleBuffer`])
//! - [`BufferError`] - Failure kinds reported by buffer operations
//!
//! Views created by [`ArrayBuffer::duplicate`], [`ArrayBuffer::slice`] and
//! [`ArrayBuffer::as_read_only_buffer`] alias the same store: writes through
//! one view are visible through the others, while cursors stay independent.
//!
//! # Example
//!
//! ```
//! use nio_buffers::{BufferError, IntBuffer, SharedArray};
//!
//! let array = SharedArray::from((0..10).collect::<Vec<i32>>());
//! let mut buffer = IntBuffer::wrap(&array, 0, 10).unwrap();
//! buffer.set_position(3).unwrap();
//!
//! let slice = buffer.slice();
//! assert_eq!(slice.capacity(), 7);
//! assert_eq!(slice.get_at(0), buffer.get_at(3));
//!
//! let mut read_only = buffer.as_read_only_buffer();
//! assert_eq!(read_only.put_at(0, 42).unwrap_err(), BufferError::ReadOnly);
//! assert_eq!(array.get(0), 0);
//! ```

mod buffer;
mod char_buffer;
mod cmp;
mod cursor;
mod element;
mod error;
mod store;

pub use buffer::{
    AccessMode, ArrayBuffer, ByteBuffer, CharBuffer, DoubleBuffer, FloatBuffer, IntBuffer,
    LongBuffer, ShortBuffer,
};
pub use cmp::{elements_cmp, elements_eq};
pub use cursor::Cursor;
pub use element::Element;
pub use error::{BufferError, Result};
pub use store::SharedArray;
