use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors reported by the checked operations of [`Sequence`](crate::Sequence)
/// and the checked algorithms in [`algo`](crate::algo).
///
/// A failed operation never modifies the sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("range {start}..{end} is invalid for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("`{op}` requires a non-empty sequence")]
    Empty { op: &'static str },

    #[error("the range is not sorted in ascending order")]
    Unsorted,
}

impl SequenceError {
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}
