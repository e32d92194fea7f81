//! An owned char array usable as a [`CharSequence`].

use std::fmt;

use crate::char_sequence::check_subsequence;
use crate::error::Result;
use crate::{ordinal, CharSequence};

/// A char sequence backed by an owned `Vec<char>`.
///
/// Equality and ordering are ordinal: chars compare by code point, and a
/// proper prefix sorts first.
///
/// # Example
///
/// ```
/// use nio_text::{CharArraySequence, CharSequence};
///
/// let seq = CharArraySequence::from("hello");
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.subsequence(1, 3).unwrap(), "ell");
/// assert!(seq < CharArraySequence::from("help"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharArraySequence {
    value: Vec<char>,
}

impl CharArraySequence {
    pub fn new(value: Vec<char>) -> Self {
        Self { value }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.value
    }

    pub fn into_inner(self) -> Vec<char> {
        self.value
    }
}

impl CharSequence for CharArraySequence {
    type Subsequence = CharArraySequence;

    fn len(&self) -> usize {
        self.value.len()
    }

    fn char_at(&self, index: usize) -> char {
        self.value[index]
    }

    fn chars_iter(&self) -> impl Iterator<Item = char> + '_ {
        self.value.iter().copied()
    }

    fn subsequence(&self, start: usize, length: usize) -> Result<CharArraySequence> {
        if start == 0 && length == self.value.len() {
            return Ok(self.clone());
        }
        check_subsequence(self.value.len(), start, length)?;
        Ok(Self::new(self.value[start..start + length].to_vec()))
    }
}

impl From<&str> for CharArraySequence {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

impl From<String> for CharArraySequence {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Vec<char>> for CharArraySequence {
    fn from(value: Vec<char>) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for CharArraySequence {
    fn eq(&self, other: &str) -> bool {
        ordinal::equals(Some(self), Some(other))
    }
}

impl PartialEq<&str> for CharArraySequence {
    fn eq(&self, other: &&str) -> bool {
        ordinal::equals(Some(self), Some(*other))
    }
}

impl PartialEq<[char]> for CharArraySequence {
    fn eq(&self, other: &[char]) -> bool {
        self.value == other
    }
}

impl fmt::Display for CharArraySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for ch in &self.value {
            f.write_char(*ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence() {
        let seq = CharArraySequence::from("abcdef");
        assert_eq!(seq.subsequence(0, 6).unwrap(), seq);
        assert_eq!(seq.subsequence(2, 3).unwrap(), "cde");
        assert_eq!(seq.subsequence(6, 0).unwrap(), "");
        assert!(seq.subsequence(4, 3).is_err());
        assert!(seq.subsequence(7, 0).is_err());
    }

    #[test]
    fn test_equality() {
        let seq = CharArraySequence::from("abc");
        assert_eq!(seq, "abc");
        assert_ne!(seq, "abd");
        assert_eq!(seq, *['a', 'b', 'c'].as_slice());
        assert_eq!(seq.to_string(), "abc");
    }

    #[test]
    fn test_ordering() {
        let a = CharArraySequence::from("ab");
        let b = CharArraySequence::from("abc");
        let c = CharArraySequence::from("b");
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
    }
}
