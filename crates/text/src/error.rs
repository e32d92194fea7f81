//! Text error type.

use nio_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    #[error("subsequence {start}+{length} exceeds sequence length {len}")]
    ArgumentRange {
        start: usize,
        length: usize,
        len: usize,
    },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

pub type Result<T, E = TextError> = std::result::Result<T, E>;
