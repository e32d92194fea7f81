//! Character sequences over strings, char arrays and char buffers.
//!
//! [`CharSequence`] gives indexed, read-only access to a run of chars.
//! It is implemented for `str`, `String`, `[char]`, `Vec<char>`,
//! [`CharArraySequence`] and [`CharBuffer`](nio_buffers::CharBuffer).
//! The [`ordinal`] module compares, equates and hashes any mix of them.
//!
//! # Example
//!
//! ```
//! use nio_buffers::CharBuffer;
//! use nio_text::{ordinal, CharSequence};
//!
//! let mut buffer = CharBuffer::wrap_str("..hello");
//! buffer.set_position(2).unwrap();
//! assert!(ordinal::equals(Some(&buffer), Some("hello")));
//! assert_eq!(
//!     ordinal::hash_code(Some(&buffer)),
//!     ordinal::hash_code(Some("hello")),
//! );
//! assert_eq!(buffer.subsequence(1, 3).unwrap().to_string(), "ell");
//! ```

mod char_array;
mod char_sequence;
mod error;
pub mod ordinal;

pub use char_array::CharArraySequence;
pub use char_sequence::CharSequence;
pub use error::{Result, TextError};
