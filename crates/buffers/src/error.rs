//! Buffer error type.

use thiserror::Error;

/// Error type for buffer operations.
///
/// Every variant describes caller misuse that the buffer detected before
/// touching any state, so a failed call leaves the view exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// An absolute index or navigation argument is outside its valid range.
    #[error("index {index} out of range for `{what}` (bound {bound})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        bound: usize,
    },
    /// A relative read found fewer elements than requested.
    #[error("buffer underflow: requested {requested}, remaining {remaining}")]
    BufferUnderflow { requested: usize, remaining: usize },
    /// A relative write found less room than requested.
    #[error("buffer overflow: requested {requested}, remaining {remaining}")]
    BufferOverflow { requested: usize, remaining: usize },
    /// A mutating operation was invoked on a read-only view.
    #[error("buffer is read-only")]
    ReadOnly,
    /// `reset` was called while no mark is set.
    #[error("mark is not set")]
    InvalidMark,
    /// An offset/length pair does not fit the array it refers to.
    #[error("range {offset}+{length} exceeds array length {len}")]
    ArgumentRange {
        offset: usize,
        length: usize,
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = BufferError> = std::result::Result<T, E>;

/// Validates that `[offset, offset + length)` fits inside `len` elements.
///
/// Uses the subtraction form so `offset + length` is never computed.
pub(crate) fn check_range(len: usize, offset: usize, length: usize) -> Result<()> {
    if offset > len || length > len - offset {
        return Err(BufferError::ArgumentRange {
            offset,
            length,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(10, 0, 10).is_ok());
        assert!(check_range(10, 10, 0).is_ok());
        assert!(check_range(0, 0, 0).is_ok());
        assert_eq!(
            check_range(10, 3, 8),
            Err(BufferError::ArgumentRange {
                offset: 3,
                length: 8,
                len: 10
            })
        );
        assert!(check_range(10, 11, 0).is_err());
    }

    #[test]
    fn test_check_range_does_not_overflow() {
        assert!(check_range(10, usize::MAX, usize::MAX).is_err());
        assert!(check_range(10, 1, usize::MAX).is_err());
        assert!(check_range(usize::MAX, usize::MAX, 0).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(BufferError::ReadOnly.to_string(), "buffer is read-only");
        assert_eq!(
            BufferError::BufferUnderflow {
                requested: 5,
                remaining: 3
            }
            .to_string(),
            "buffer underflow: requested 5, remaining 3"
        );
    }
}
