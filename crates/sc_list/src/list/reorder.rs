//! Reordering without moving values.
//!
//! Sorting and reversing only rewrite links. Nodes stay in their arena slots,
//! so every position keeps designating the same element afterwards.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use super::DequeList;
use crate::node::NodeKey;

impl<T> DequeList<T> {
    /// Sorts the list in ascending order. Stable, *O*(*n* log *n*).
    ///
    /// ```
    /// use sc_list::DequeList;
    ///
    /// let mut list = DequeList::from([3, 1, 2]);
    /// let three = list.begin();
    /// list.sort();
    /// assert_eq!(list, [1, 2, 3]);
    /// // Positions follow their elements.
    /// assert_eq!(list.get(three), Ok(&3));
    /// assert_eq!(list.next(three), Ok(list.end()));
    /// ```
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list with a comparator. Stable, *O*(*n* log *n*).
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        let mut order: Vec<NodeKey> = self.keys().collect();
        order.sort_by(|a, b| compare(&self.nodes[*a].value, &self.nodes[*b].value));
        self.relink(&order);
        self.verify_links();
    }

    /// Sorts the list by a key extraction function. Stable.
    #[inline]
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Reverses the order of the elements. *O*(*n*).
    pub fn reverse(&mut self) {
        for node in self.nodes.values_mut() {
            mem::swap(&mut node.prev, &mut node.next);
        }
        mem::swap(&mut self.head, &mut self.tail);
        self.verify_links();
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::DequeList;

    #[test]
    fn sort_keeps_positions() {
        let mut list = DequeList::from([5, 2, 4, 1, 3]);
        let positions: alloc::vec::Vec<_> = (0..5).map(|i| list.position_at(i).unwrap()).collect();

        list.sort();
        assert_eq!(list, [1, 2, 3, 4, 5]);
        assert!(list.is_sorted());
        assert!(list.check_links());

        let values: alloc::vec::Vec<_> = positions.iter().map(|p| *list.get(*p).unwrap()).collect();
        assert_eq!(values, [5, 2, 4, 1, 3]);
        assert_eq!(list.begin(), positions[3]);
    }

    #[test]
    fn sort_is_stable() {
        let mut list = DequeList::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        list.sort_by_key(|pair| pair.0);
        assert_eq!(list, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        list.sort_by(|a, b| b.0.cmp(&a.0));
        assert_eq!(list, [(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
    }

    #[test]
    fn reverse_swaps_ends() {
        let mut list = DequeList::from([1, 2, 3, 4]);
        let first = list.begin();
        list.reverse();
        assert_eq!(list, [4, 3, 2, 1]);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.next(first), Ok(list.end()));
        assert!(list.check_links());

        let mut empty = DequeList::<u8>::new();
        empty.reverse();
        empty.sort();
        assert!(empty.is_empty());
    }
}
