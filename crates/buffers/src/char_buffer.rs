//! Text helpers specific to [`CharBuffer`].

use std::fmt;

use crate::error::{check_range, BufferError, Result};
use crate::{AccessMode, ArrayBuffer, CharBuffer, Cursor, SharedArray};

impl ArrayBuffer<char> {
    /// Creates a read-only buffer holding the chars of `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use nio_buffers::CharBuffer;
    ///
    /// let buffer = CharBuffer::wrap_str("héllo");
    /// assert!(buffer.is_read_only());
    /// assert_eq!(buffer.remaining(), 5);
    /// assert_eq!(buffer.to_string(), "héllo");
    /// ```
    pub fn wrap_str(text: &str) -> Self {
        let store: SharedArray<char> = text.chars().collect::<Vec<_>>().into();
        Self::from_parts(Cursor::new(store.len()), store, 0, AccessMode::ReadOnly)
    }

    /// Writes the chars of `text` at the position.
    ///
    /// Nothing is written if the text does not fit.
    pub fn put_str(&mut self, text: &str) -> Result<&mut Self> {
        self.put_str_range(text, 0, text.chars().count())
    }

    /// Writes `length` chars of `text`, starting at char `start`, at the
    /// position.
    ///
    /// `start` and `length` count chars, not bytes. Nothing is written on
    /// failure.
    ///
    /// # Example
    ///
    /// ```
    /// use nio_buffers::CharBuffer;
    ///
    /// let mut buffer = CharBuffer::allocate(4);
    /// buffer.put_str_range("¡hola!", 1, 4).unwrap();
    /// buffer.flip();
    /// assert_eq!(buffer.to_string(), "hola");
    /// ```
    pub fn put_str_range(&mut self, text: &str, start: usize, length: usize) -> Result<&mut Self> {
        self.check_writable("put_str_range")?;
        check_range(text.chars().count(), start, length)?;
        let remaining = self.remaining();
        if length > remaining {
            return Err(BufferError::BufferOverflow {
                requested: length,
                remaining,
            });
        }
        for ch in text.chars().skip(start).take(length) {
            self.put(ch)?;
        }
        Ok(self)
    }

    /// Reads the char `index` places after the position.
    pub fn char_at(&self, index: usize) -> Result<char> {
        if index >= self.remaining() {
            return Err(BufferError::IndexOutOfRange {
                what: "char index",
                index,
                bound: self.remaining(),
            });
        }
        self.get_at(self.position() + index)
    }

    /// A view over `length` chars starting `start` places after the
    /// position.
    ///
    /// The view shares the store and capacity of `self`; only its position
    /// and limit differ.
    pub fn sub_sequence(&self, start: usize, length: usize) -> Result<CharBuffer> {
        check_range(self.remaining(), start, length)?;
        let position = self.position();
        let mut view = self.duplicate();
        view.set_limit(position + start + length)?;
        view.set_position(position + start)?;
        Ok(view)
    }
}

/// Prints the remaining chars.
impl fmt::Display for ArrayBuffer<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for ch in self.remaining_iter() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_str() {
        let buffer = CharBuffer::wrap_str("日本");
        assert_eq!(buffer.capacity(), 2);
        assert!(buffer.is_read_only());
        assert_eq!(buffer.get_at(1), Ok('本'));
        assert_eq!(CharBuffer::wrap_str("").remaining(), 0);
    }

    #[test]
    fn test_put_str() {
        let mut buffer = CharBuffer::allocate(6);
        buffer.put_str("ab").unwrap().put_str("cd").unwrap();
        assert_eq!(
            buffer.put_str("xyz").unwrap_err(),
            BufferError::BufferOverflow {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(buffer.position(), 4);
        buffer.flip();
        assert_eq!(buffer.to_string(), "abcd");
    }

    #[test]
    fn test_put_str_read_only() {
        let mut buffer = CharBuffer::wrap_str("abc");
        assert_eq!(buffer.put_str("").unwrap_err(), BufferError::ReadOnly);
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_char_at_is_relative() {
        let mut buffer = CharBuffer::wrap_str("hello");
        buffer.set_position(1).unwrap();
        assert_eq!(buffer.char_at(0), Ok('e'));
        assert_eq!(buffer.char_at(3), Ok('o'));
        assert!(buffer.char_at(4).is_err());
    }

    #[test]
    fn test_sub_sequence() {
        let mut buffer = CharBuffer::wrap_str("hello world");
        buffer.set_position(6).unwrap();
        let sub = buffer.sub_sequence(1, 3).unwrap();
        assert_eq!(sub.to_string(), "orl");
        assert_eq!(sub.capacity(), buffer.capacity());
        assert_eq!((sub.position(), sub.limit()), (7, 10));
        assert!(sub.is_read_only());
        assert_eq!(
            buffer.sub_sequence(3, 3).unwrap_err(),
            BufferError::ArgumentRange {
                offset: 3,
                length: 3,
                len: 5
            }
        );
        assert!(buffer.sub_sequence(6, 0).is_err());
        assert!(buffer.sub_sequence(1, usize::MAX).is_err());
        assert_eq!(buffer.sub_sequence(5, 0).unwrap().to_string(), "");
    }

    #[test]
    fn test_sub_sequence_shares_store() {
        let mut buffer = CharBuffer::allocate(4);
        buffer.put_str("abcd").unwrap();
        buffer.flip();
        let mut sub = buffer.sub_sequence(1, 2).unwrap();
        assert_eq!(sub.to_string(), "bc");
        sub.put('X').unwrap();
        assert_eq!(buffer.to_string(), "aXcd");
    }

    #[test]
    fn test_put_str_range() {
        let mut buffer = CharBuffer::allocate(5);
        buffer.put_str_range("añbc", 1, 2).unwrap();
        buffer.put_str_range("xyz", 3, 0).unwrap();
        assert_eq!(buffer.position(), 2);
        buffer.flip();
        assert_eq!(buffer.to_string(), "ñb");
    }

    #[test]
    fn test_put_str_range_read_only_first() {
        let mut buffer = CharBuffer::wrap_str("abc");
        assert_eq!(
            buffer.put_str_range("xy", 5, 9).unwrap_err(),
            BufferError::ReadOnly
        );
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_put_str_range_argument_range() {
        let mut buffer = CharBuffer::allocate(8);
        assert_eq!(
            buffer.put_str_range("añb", 2, 2).unwrap_err(),
            BufferError::ArgumentRange {
                offset: 2,
                length: 2,
                len: 3
            }
        );
        assert!(buffer.put_str_range("abc", 1, usize::MAX).is_err());
        assert!(buffer.put_str_range("abc", usize::MAX, 1).is_err());
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_put_str_range_overflow_writes_nothing() {
        let mut buffer = CharBuffer::allocate(4);
        buffer.put('a').unwrap();
        buffer.set_limit(3).unwrap();
        assert_eq!(
            buffer.put_str_range("wxyz", 0, 3).unwrap_err(),
            BufferError::BufferOverflow {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(buffer.position(), 1);
        assert_eq!(buffer.get_at(1), Ok('\0'));
    }
}
