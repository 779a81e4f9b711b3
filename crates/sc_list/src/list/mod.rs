//! Doubly linked list over a generational node arena.
//!
//! Nodes live in a [`SlotMap`] owned by the list. `prev`/`next` links and
//! the `head`/`tail` ends are arena keys, so links never own anything and a
//! stale key simply fails to resolve.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::successors;

use slotmap::SlotMap;

use crate::node::{Node, NodeKey};
use crate::{ListError, ListId, Position};

// -----------------------------------------------------------------------------
// Modules

mod cursor;
mod edit;
mod iter;
mod reorder;
mod transfer;

pub use iter::{IntoIter, Iter, IterMut};

// -----------------------------------------------------------------------------
// Config

/// Arena slots are addressed by a 32-bit index.
const MAX_NODES: usize = (u32::MAX - 1) as usize;

/// Walk the whole list after structural operations. The walk is *O*(*n*),
/// so it needs both a Debug build and the `debug` feature.
const VERIFY_LINKS: bool = cfg!(all(debug_assertions, feature = "debug"));

// -----------------------------------------------------------------------------
// DequeList

/// A doubly linked list with checked positions.
///
/// `DequeList` supports *O*(1) insertion and removal at either end and at
/// any [`Position`] already obtained, while reaching a position by index
/// takes *O*(*n*).
///
/// # Examples
///
/// ```
/// use sc_list::DequeList;
///
/// let mut list = DequeList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(3);
/// list.push_front(4);
/// list.push_back(5);
/// assert_eq!(list, [4, 3, 1, 2, 5]);
///
/// // Insert before the fourth element.
/// let pos = list.advance(list.begin(), 3).unwrap();
/// list.insert(pos, 40).unwrap();
/// assert_eq!(list, [4, 3, 1, 40, 2, 5]);
///
/// // `pos` still designates `2`; erasing it hands back the next position.
/// let next = list.erase(pos).unwrap();
/// assert_eq!(list.get(next), Ok(&5));
/// assert!(list.erase(pos).is_err());
/// ```
pub struct DequeList<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    id: ListId,
}

impl<T> DequeList<T> {
    /// Creates an empty `DequeList` with a fresh [`ListId`].
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            id: ListId::next(),
        }
    }

    /// Returns the identity positions of this list are tagged with.
    #[inline]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Returns the number of elements. *O*(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the maximum number of elements a list can hold.
    #[inline]
    pub const fn max_size(&self) -> usize {
        MAX_NODES
    }

    /// Drops every element.
    ///
    /// All positions except [`end`](Self::end) become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    // -------------------------------------------------------------------------
    // Link primitives

    #[inline]
    fn position(&self, node: Option<NodeKey>) -> Position {
        Position {
            list: self.id,
            node,
        }
    }

    /// Checks that `pos` belongs to this list and still designates a node
    /// (or the end).
    fn resolve(&self, pos: Position) -> Result<Option<NodeKey>, ListError> {
        if pos.list != self.id {
            return Err(ListError::ForeignPosition {
                expect: self.id,
                actual: pos.list,
            });
        }
        match pos.node {
            Some(key) if !self.nodes.contains_key(key) => Err(ListError::StalePosition),
            node => Ok(node),
        }
    }

    /// Keys in list order.
    #[inline]
    fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        successors(self.head, |key| self.nodes[*key].next)
    }

    /// Creates a node holding `value` right before `at` (`None` is the end).
    fn link_before(&mut self, at: Option<NodeKey>, value: T) -> NodeKey {
        let prev = match at {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        let key = self.nodes.insert(Node {
            value,
            prev,
            next: at,
        });
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        match at {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
        key
    }

    /// Detaches and destroys a node, returning its value and its successor.
    fn unlink(&mut self, key: NodeKey) -> Option<(T, Option<NodeKey>)> {
        let node = self.nodes.remove(key)?;
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some((node.value, node.next))
    }

    /// Rebuilds every link so the list follows `order`.
    ///
    /// `order` must hold each key of the arena exactly once.
    fn relink(&mut self, order: &[NodeKey]) {
        debug_assert_eq!(order.len(), self.nodes.len());
        self.head = order.first().copied();
        self.tail = order.last().copied();

        let mut prev = None;
        for (index, &key) in order.iter().enumerate() {
            let node = &mut self.nodes[key];
            node.prev = prev;
            node.next = order.get(index + 1).copied();
            prev = Some(key);
        }
    }

    /// Walks the list from the head and checks every `prev` link against it.
    fn check_links(&self) -> bool {
        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let Some(node) = self.nodes.get(key) else {
                return false;
            };
            count += 1;
            if node.prev != prev || count > self.nodes.len() {
                return false;
            }
            prev = cursor;
            cursor = node.next;
        }
        prev == self.tail && count == self.nodes.len()
    }

    #[inline(always)]
    fn verify_links(&self) {
        if VERIFY_LINKS {
            assert!(self.check_links(), "DequeList links are inconsistent");
        }
    }

    // -------------------------------------------------------------------------
    // Ends

    /// Prepends an element and returns its position. *O*(1).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Position {
        let key = self.link_before(self.head, value);
        self.position(Some(key))
    }

    /// Appends an element and returns its position. *O*(1).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Position {
        let key = self.link_before(None, value);
        self.position(Some(key))
    }

    /// Removes and returns the first element.
    ///
    /// ```
    /// use sc_list::{DequeList, ListError};
    ///
    /// let mut list = DequeList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Err(ListError::Empty { op: "pop_front" }));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        match self.head.and_then(|key| self.unlink(key)) {
            Some((value, _)) => Ok(value),
            None => Err(ListError::Empty { op: "pop_front" }),
        }
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        match self.tail.and_then(|key| self.unlink(key)) {
            Some((value, _)) => Ok(value),
            None => Err(ListError::Empty { op: "pop_back" }),
        }
    }

    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        match self.head {
            Some(key) => Ok(&self.nodes[key].value),
            None => Err(ListError::Empty { op: "front" }),
        }
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        match self.head {
            Some(key) => Ok(&mut self.nodes[key].value),
            None => Err(ListError::Empty { op: "front" }),
        }
    }

    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        match self.tail {
            Some(key) => Ok(&self.nodes[key].value),
            None => Err(ListError::Empty { op: "back" }),
        }
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        match self.tail {
            Some(key) => Ok(&mut self.nodes[key].value),
            None => Err(ListError::Empty { op: "back" }),
        }
    }

    // -------------------------------------------------------------------------
    // Iteration

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a front-to-back iterator of mutable references.
    ///
    /// Collects the references up front, which costs one allocation of
    /// `len()` pointers.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns `true` if the elements are in ascending order.
    pub fn is_sorted(&self) -> bool
    where
        T: Ord,
    {
        self.iter().is_sorted()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for DequeList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy gets its own [`ListId`], so positions of the
/// original are foreign to it.
impl<T: Clone> Clone for DequeList<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            id: ListId::next(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DequeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DequeList<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DequeList<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DequeList<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.len() == N && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: PartialOrd> PartialOrd for DequeList<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for DequeList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for DequeList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T> FromIterator<T> for DequeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DequeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_before(None, value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DequeList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        Extend::<T>::extend(self, iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for DequeList<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DequeList;
    use crate::ListError;
    use alloc::vec::Vec;

    #[test]
    fn is_sync_send() {
        use core::panic::{RefUnwindSafe, UnwindSafe};

        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}
        fn is_unwindsafe<T: UnwindSafe>() {}
        fn is_refunwindsafe<T: RefUnwindSafe>() {}

        is_send::<DequeList<i32>>();
        is_sync::<DequeList<i32>>();
        is_unwindsafe::<DequeList<i32>>();
        is_refunwindsafe::<DequeList<i32>>();
    }

    #[test]
    fn link_walk_needs_debug_build_and_feature() {
        assert_eq!(
            super::VERIFY_LINKS,
            cfg!(debug_assertions) && cfg!(feature = "debug")
        );

        // Release builds must erase one node without touching the rest.
        let mut list: DequeList<u32> = (0..64).collect();
        for _ in 0..32 {
            let first = list.begin();
            let second = list.next(first).unwrap();
            assert_eq!(list.erase_range(first, second), Ok(second));
        }
        assert_eq!(list.len(), 32);
        assert_eq!(list.front(), Ok(&32));
        assert!(list.check_links());
    }

    #[test]
    fn pushes_at_both_ends() {
        let mut list = DequeList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(3);
        list.push_front(4);
        list.push_back(5);

        assert_eq!(list, [4, 3, 1, 2, 5]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.front(), Ok(&4));
        assert_eq!(list.back(), Ok(&5));
        assert!(list.check_links());
    }

    #[test]
    fn pops_drain_both_ends() {
        let mut list = DequeList::from([99, 4, 3, 1, 88]);
        assert_eq!(list.pop_front(), Ok(99));
        assert_eq!(list.pop_back(), Ok(88));
        assert_eq!(list, [4, 3, 1]);
        assert!(list.check_links());

        let mut single = DequeList::from([7]);
        assert_eq!(single.pop_back(), Ok(7));
        assert!(single.is_empty());
        assert_eq!(single.pop_back(), Err(ListError::Empty { op: "pop_back" }));
        assert_eq!(single.front(), Err(ListError::Empty { op: "front" }));
        assert!(single.check_links());
    }

    #[test]
    fn ends_are_mutable() {
        let mut list = DequeList::from([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() += 30;
        assert_eq!(list, [10, 2, 33]);
    }

    #[test]
    fn clone_is_deep_with_new_identity() {
        let original = DequeList::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_ne!(copy.id(), original.id());

        let begin = original.begin();
        assert!(matches!(
            copy.get(begin),
            Err(ListError::ForeignPosition { .. })
        ));

        copy.push_back(4);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn clear_keeps_end_valid() {
        let mut list = DequeList::from([1, 2]);
        let first = list.begin();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(first), Err(ListError::StalePosition));
        assert_eq!(list.begin(), list.end());
        list.push_back(5);
        assert_eq!(list.get(list.begin()), Ok(&5));
        assert!(list.check_links());
    }

    #[test]
    fn extend_by_reference_copies() {
        let source = [7, 8, 9];
        let mut list = DequeList::from([6]);
        list.extend(&source);
        assert_eq!(list, [6, 7, 8, 9]);
        assert_eq!(source, [7, 8, 9]);
        assert!(list.check_links());
    }

    #[test]
    fn comparison_and_collect() {
        let a: DequeList<i32> = (1..=3).collect();
        let b = DequeList::from([1, 2, 4]);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert!(a.max_size() >= a.len());
    }
}
