use alloc::vec::{self, Vec};
use core::fmt;
use core::iter::FusedIterator;

use slotmap::{SecondaryMap, SlotMap};

use super::DequeList;
use crate::node::{Node, NodeKey};

// -----------------------------------------------------------------------------
// Iter

/// Immutable iterator over a [`DequeList`], created by [`DequeList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(list: &'a DequeList<T>) -> Self {
        Self {
            nodes: &list.nodes,
            front: list.head,
            back: list.tail,
            len: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// -----------------------------------------------------------------------------
// IterMut

/// Mutable iterator over a [`DequeList`], created by [`DequeList::iter_mut`].
pub struct IterMut<'a, T> {
    inner: vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut DequeList<T>) -> Self {
        let order: Vec<NodeKey> = list.keys().collect();
        let mut refs: SecondaryMap<NodeKey, &'a mut T> = list
            .nodes
            .iter_mut()
            .map(|(key, node)| (key, &mut node.value))
            .collect();
        let inner: Vec<&'a mut T> = order.iter().filter_map(|key| refs.remove(*key)).collect();
        Self {
            inner: inner.into_iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.inner.len()).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// -----------------------------------------------------------------------------
// IntoIter

/// Owning iterator over a [`DequeList`].
pub struct IntoIter<T> {
    list: DequeList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// -----------------------------------------------------------------------------
// IntoIterator

impl<T> IntoIterator for DequeList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DequeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DequeList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::DequeList;
    use alloc::vec::Vec;

    #[test]
    fn iter_from_both_ends() {
        let list = DequeList::from([1, 2, 3, 4]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let rev: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(rev, [4, 3, 2, 1]);
    }

    #[test]
    fn iter_mut_follows_list_order() {
        let mut list = DequeList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        // Arena order differs from list order after the sort.
        list.sort_by(|a, b| b.cmp(a));

        for (index, value) in list.iter_mut().enumerate() {
            *value *= 10 + index as i32;
        }
        assert_eq!(list, [30, 22, 12]);

        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list.iter_mut().rev().map(|v| *v).collect::<Vec<_>>(), [13, 23, 31]);
    }

    #[test]
    fn into_iter_takes_ownership() {
        let list = DequeList::from([
            alloc::string::String::from("a"),
            alloc::string::String::from("b"),
            alloc::string::String::from("c"),
        ]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn borrowed_into_iter() {
        let list = DequeList::from([1, 2, 3]);
        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 6);
    }
}
