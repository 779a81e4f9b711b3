use thiserror::Error;

use crate::ListId;

// -----------------------------------------------------------------------------
// Error

/// Errors reported by [`DequeList`](crate::DequeList) operations.
///
/// Every operation validates its positions before touching the list, so an
/// error always leaves both lists involved unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    #[error("`{op}` requires a non-empty list")]
    Empty { op: &'static str },

    #[error("position belongs to list {actual}, expected list {expect}")]
    ForeignPosition { expect: ListId, actual: ListId },

    #[error("position refers to a node that has been erased")]
    StalePosition,

    #[error("position moved past either end of the list")]
    OutOfRange,

    #[error("the end of the range is not reachable from its start")]
    InvalidRange,

    #[error("the list is not sorted in ascending order")]
    Unsorted,
}

impl ListError {
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}
