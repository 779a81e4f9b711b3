//! Moving elements between lists.
//!
//! Each list owns its own arena, so an element moving to another list is
//! re-homed into the receiver's arena. Its value is moved, never cloned, but
//! its old position becomes stale.

use core::cmp::Ordering;
use core::mem;

use super::DequeList;
use crate::{ListError, Position};

impl<T> DequeList<T> {
    /// Merges the sorted `other` into this sorted list, leaving `other` empty.
    ///
    /// The merge is stable: an element of `self` precedes an equal element of
    /// `other`. *O*(*n* + *m*).
    ///
    /// Both lists must be sorted in ascending order; otherwise the result is
    /// unspecified but still a valid list holding every element once. Use
    /// [`try_merge`](Self::try_merge) to check first.
    ///
    /// ```
    /// use sc_list::DequeList;
    ///
    /// let mut a = DequeList::from([1, 4, 7]);
    /// let mut b = DequeList::from([2, 4, 8]);
    /// a.merge(&mut b);
    /// assert_eq!(a, [1, 2, 4, 4, 7, 8]);
    /// assert!(b.is_empty());
    /// ```
    #[inline]
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, T::cmp);
    }

    /// Merges the sorted `other` into this list with a comparator.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = self.head;
        while let Ok(value) = other.pop_front() {
            while let Some(key) = cursor {
                let node = &self.nodes[key];
                if compare(&node.value, &value) == Ordering::Greater {
                    break;
                }
                cursor = node.next;
            }
            self.link_before(cursor, value);
        }
        self.verify_links();
    }

    /// Like [`merge`](Self::merge), but checks that both lists are sorted
    /// first.
    ///
    /// Returns [`ListError::Unsorted`] and leaves both lists untouched if
    /// either one is not.
    pub fn try_merge(&mut self, other: &mut Self) -> Result<(), ListError>
    where
        T: Ord,
    {
        if !self.is_sorted() || !other.is_sorted() {
            log::debug!("Refused to merge lists {} and {}: not sorted.", self.id, other.id);
            return Err(ListError::Unsorted);
        }
        self.merge(other);
        Ok(())
    }

    /// Moves every element of `other` before `pos`, leaving `other` empty.
    ///
    /// If this list is empty, the two lists are exchanged in *O*(1) as by
    /// [`swap`](Self::swap): the moved elements keep their positions, and
    /// the end position of this list now belongs to `other`. Otherwise the
    /// elements are re-homed one by one in *O*(*m*) and their old positions
    /// become stale.
    ///
    /// ```
    /// use sc_list::DequeList;
    ///
    /// let mut a = DequeList::from([1, 5]);
    /// let mut b = DequeList::from([2, 3, 4]);
    /// let pos = a.position_at(1).unwrap();
    /// a.splice(pos, &mut b).unwrap();
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn splice(&mut self, pos: Position, other: &mut Self) -> Result<(), ListError> {
        let at = self.resolve(pos)?;
        if self.is_empty() {
            self.swap(other);
            return Ok(());
        }
        while let Ok(value) = other.pop_front() {
            self.link_before(at, value);
        }
        self.verify_links();
        Ok(())
    }

    /// Moves the element at `at` in `other` before `pos` and returns its new
    /// position.
    ///
    /// *O*(1). The value is re-homed into this list's arena, so `at` becomes
    /// stale in `other`; use the returned position instead.
    ///
    /// ```
    /// use sc_list::{DequeList, ListError};
    ///
    /// let mut a = DequeList::from([1]);
    /// let mut b = DequeList::from([2, 3]);
    /// let two = b.begin();
    /// let end = a.end();
    /// let moved = a.splice_one(end, &mut b, two).unwrap();
    /// assert_eq!(a, [1, 2]);
    /// assert_eq!(a.get(moved), Ok(&2));
    /// assert_eq!(b.get(two), Err(ListError::StalePosition));
    /// ```
    pub fn splice_one(
        &mut self,
        pos: Position,
        other: &mut Self,
        at: Position,
    ) -> Result<Position, ListError> {
        let dest = self.resolve(pos)?;
        let Some(key) = other.resolve(at)? else {
            return Err(ListError::OutOfRange);
        };
        let Some((value, _)) = other.unlink(key) else {
            return Err(ListError::StalePosition);
        };
        let key = self.link_before(dest, value);
        Ok(self.position(Some(key)))
    }

    /// Moves `[first, last)` of `other` before `pos`, keeping their order.
    ///
    /// Returns the new position of the first moved element, or `pos` if the
    /// range is empty. The range is validated before anything moves.
    ///
    /// *O*(*k*) for `k` moved elements, plus the *O*(*k*) validation walk.
    /// Each value is re-homed into this list's arena, so positions of the
    /// moved elements become stale in `other`.
    pub fn splice_range(
        &mut self,
        pos: Position,
        other: &mut Self,
        first: Position,
        last: Position,
    ) -> Result<Position, ListError> {
        let dest = self.resolve(pos)?;
        other.distance(first, last)?;

        let mut moved = None;
        let mut cursor = first.node;
        while cursor != last.node {
            let Some((value, next)) = cursor.and_then(|key| other.unlink(key)) else {
                break;
            };
            let key = self.link_before(dest, value);
            moved.get_or_insert(key);
            cursor = next;
        }
        other.verify_links();
        self.verify_links();
        Ok(match moved {
            Some(key) => self.position(Some(key)),
            None => pos,
        })
    }

    /// Exchanges the contents of two lists in *O*(1).
    ///
    /// Identities are exchanged too, so every position keeps designating the
    /// same element, now inside the other list value.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{DequeList, ListError};

    #[test]
    fn merge_interleaves_sorted_lists() {
        let mut a = DequeList::from([2, 4, 6, 8]);
        let mut b = DequeList::from([1, 3, 5, 9, 10]);
        let kept = a.position_at(2).unwrap();

        a.merge(&mut b);
        assert_eq!(a.len(), 9);
        assert!(a.is_sorted());
        assert!(b.is_empty());
        assert_eq!(a, [1, 2, 3, 4, 5, 6, 8, 9, 10]);
        // Elements of the receiver never move.
        assert_eq!(a.get(kept), Ok(&6));
        assert!(a.check_links());
        assert!(b.check_links());
    }

    #[test]
    fn merge_is_stable() {
        let mut a = DequeList::from([(1, 'a'), (2, 'a'), (2, 'b')]);
        let mut b = DequeList::from([(1, 'x'), (2, 'x'), (3, 'x')]);
        a.merge_by(&mut b, |l, r| l.0.cmp(&r.0));
        assert_eq!(
            a,
            [(1, 'a'), (1, 'x'), (2, 'a'), (2, 'b'), (2, 'x'), (3, 'x')]
        );
    }

    #[test]
    fn merge_with_empty_sides() {
        let mut a = DequeList::new();
        let mut b = DequeList::from([1, 2]);
        a.merge(&mut b);
        assert_eq!(a, [1, 2]);

        let mut c = DequeList::new();
        a.merge(&mut c);
        assert_eq!(a, [1, 2]);
    }

    #[test]
    fn try_merge_rejects_unsorted() {
        let mut a = DequeList::from([1, 3, 2]);
        let mut b = DequeList::from([0, 4]);
        assert_eq!(a.try_merge(&mut b), Err(ListError::Unsorted));
        assert_eq!(a, [1, 3, 2]);
        assert_eq!(b, [0, 4]);

        a.sort();
        assert_eq!(a.try_merge(&mut b), Ok(()));
        assert_eq!(a, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn splice_moves_everything() {
        let mut a = DequeList::from([1, 5]);
        let mut b = DequeList::from([2, 3, 4]);
        let two = b.begin();

        let pos = a.position_at(1).unwrap();
        a.splice(pos, &mut b).unwrap();
        assert_eq!(a, [1, 2, 3, 4, 5]);
        assert!(b.is_empty());
        assert_eq!(b.get(two), Err(ListError::StalePosition));
        assert!(matches!(a.get(two), Err(ListError::ForeignPosition { .. })));
        assert!(a.check_links());
    }

    #[test]
    fn splice_into_empty_keeps_positions() {
        let mut a = DequeList::new();
        let mut b = DequeList::from([7, 8]);
        let seven = b.begin();

        let end = a.end();
        a.splice(end, &mut b).unwrap();
        assert_eq!(a, [7, 8]);
        assert!(b.is_empty());
        assert_eq!(a.get(seven), Ok(&7));
    }

    #[test]
    fn splice_one_and_range() {
        let mut a = DequeList::from([1, 2]);
        let mut b = DequeList::from([10, 20, 30, 40]);

        let twenty = b.position_at(1).unwrap();
        let end = a.end();
        let moved = a.splice_one(end, &mut b, twenty).unwrap();
        assert_eq!(a, [1, 2, 20]);
        assert_eq!(b, [10, 30, 40]);
        assert_eq!(a.get(moved), Ok(&20));
        assert_eq!(b.get(twenty), Err(ListError::StalePosition));
        let b_end = b.end();
        assert_eq!(a.splice_one(end, &mut b, b_end), Err(ListError::OutOfRange));

        let first = b.begin();
        let last = b.position_at(2).unwrap();
        let begin = a.begin();
        let head = a.splice_range(begin, &mut b, first, last).unwrap();
        assert_eq!(a, [10, 30, 1, 2, 20]);
        assert_eq!(b, [40]);
        assert_eq!(head, a.begin());

        let back = b.begin();
        assert_eq!(
            a.splice_range(begin, &mut b, b_end, back),
            Err(ListError::InvalidRange)
        );
        assert_eq!(b, [40]);
        assert!(a.check_links());
        assert!(b.check_links());
    }

    #[test]
    fn swap_carries_positions() {
        let mut a = DequeList::from([1, 2]);
        let mut b = DequeList::from([3]);
        let (a_id, one) = (a.id(), a.begin());

        a.swap(&mut b);
        assert_eq!(a, [3]);
        assert_eq!(b, [1, 2]);
        assert_eq!(b.id(), a_id);
        assert_eq!(b.get(one), Ok(&1));
    }
}
