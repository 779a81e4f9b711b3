use core::fmt::{Debug, Display};
use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::node::NodeKey;

// -----------------------------------------------------------------------------
// ListId

/// Identity of a [`DequeList`](crate::DequeList) instance.
///
/// Every list (including every clone) draws a fresh id from a process-wide
/// counter, which lets a list reject positions that were produced by another
/// list.
///
/// # Aliasing
///
/// The counter is 32 bits wide and wraps. After wrapping, two lists created
/// about `u32::MAX` constructions apart may share an id.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ListId(NonZeroU32);

impl ListId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(1);

        loop {
            if let Some(id) = NonZeroU32::new(COUNTER.fetch_add(1, Ordering::Relaxed)) {
                return Self(id);
            }
            log::warn!("ListId counter wrapped, positions of old lists may alias.");
        }
    }

    /// Returns the raw id.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Debug for ListId {
    #[inline(always)]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for ListId {
    #[inline(always)]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Position

/// An opaque location inside a [`DequeList`](crate::DequeList).
///
/// A position designates either one node or the past-the-end slot. It is a
/// plain `Copy` handle and borrows nothing, so the list can be mutated while
/// positions are held.
///
/// # Invalidation
///
/// A position stays valid until the node it designates leaves the list:
/// erased, removed, popped, moved away by a splice or merge, or dropped by
/// `clear`/`assign`. Inserting, sorting, reversing or swapping never
/// invalidates it. Using an invalidated position is reported as
/// [`ListError::StalePosition`](crate::ListError::StalePosition), and using a
/// position of another list as
/// [`ListError::ForeignPosition`](crate::ListError::ForeignPosition).
///
/// The end position of a list never becomes invalid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) list: ListId,
    pub(crate) node: Option<NodeKey>,
}

impl Position {
    /// Returns `true` if this is the past-the-end position.
    #[inline(always)]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the id of the list this position was produced by.
    #[inline(always)]
    pub const fn list(&self) -> ListId {
        self.list
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.node {
            Some(key) => write!(f, "Position({}, {key:?})", self.list),
            None => write!(f, "Position({}, end)", self.list),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
