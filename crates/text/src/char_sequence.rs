//! The `CharSequence` abstraction and its implementations.

use nio_buffers::CharBuffer;

use crate::error::{Result, TextError};
use crate::CharArraySequence;

/// A readable sequence of chars with random access.
///
/// Implemented for `str`, `String`, `[char]`, `Vec<char>`,
/// [`CharArraySequence`] and [`CharBuffer`]. A char buffer presents its
/// remaining chars: index 0 is the char at the buffer's position.
pub trait CharSequence {
    /// The type returned by [`subsequence`](Self::subsequence).
    type Subsequence: CharSequence;

    /// Number of chars in the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the char at `index`.
    ///
    /// Panics if `index >= self.len()`, like slice indexing.
    fn char_at(&self, index: usize) -> char;

    /// Iterates the chars in order.
    fn chars_iter(&self) -> impl Iterator<Item = char> + '_;

    /// The `length` chars starting at `start`.
    fn subsequence(&self, start: usize, length: usize) -> Result<Self::Subsequence>;

    fn to_char_vec(&self) -> Vec<char> {
        self.chars_iter().collect()
    }
}

/// Validates `start`/`length` against `len` without computing `start + length`.
pub(crate) fn check_subsequence(len: usize, start: usize, length: usize) -> Result<()> {
    if start > len || length > len - start {
        return Err(TextError::ArgumentRange { start, length, len });
    }
    Ok(())
}

fn copy_subsequence<S: CharSequence + ?Sized>(
    sequence: &S,
    start: usize,
    length: usize,
) -> Result<CharArraySequence> {
    check_subsequence(sequence.len(), start, length)?;
    Ok(CharArraySequence::new(
        sequence.chars_iter().skip(start).take(length).collect(),
    ))
}

#[cold]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("char index {index} out of range for sequence of length {len}")
}

impl CharSequence for str {
    type Subsequence = CharArraySequence;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn char_at(&self, index: usize) -> char {
        match self.chars().nth(index) {
            Some(ch) => ch,
            None => index_out_of_range(index, CharSequence::len(self)),
        }
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharArraySequence> {
        copy_subsequence(self, start, length)
    }
}

impl CharSequence for String {
    type Subsequence = CharArraySequence;

    fn len(&self) -> usize {
        CharSequence::len(self.as_str())
    }

    fn char_at(&self, index: usize) -> char {
        self.as_str().char_at(index)
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharArraySequence> {
        self.as_str().subsequence(start, length)
    }
}

impl CharSequence for [char] {
    type Subsequence = CharArraySequence;

    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharArraySequence> {
        check_subsequence(<[char]>::len(self), start, length)?;
        Ok(CharArraySequence::new(self[start..start + length].to_vec()))
    }
}

impl CharSequence for Vec<char> {
    type Subsequence = CharArraySequence;

    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharArraySequence> {
        self.as_slice().subsequence(start, length)
    }
}

/// Char buffers expose their remaining chars. Subsequences are views that
/// share the buffer's store.
impl CharSequence for CharBuffer {
    type Subsequence = CharBuffer;

    fn len(&self) -> usize {
        self.remaining()
    }

    fn char_at(&self, index: usize) -> char {
        match CharBuffer::char_at(self, index) {
            Ok(ch) => ch,
            Err(_) => index_out_of_range(index, self.remaining()),
        }
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.remaining_iter()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharBuffer> {
        check_subsequence(self.remaining(), start, length)?;
        Ok(self.sub_sequence(start, length)?)
    }
}
