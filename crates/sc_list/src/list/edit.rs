//! Insertion and removal at positions.

use core::iter;

use super::DequeList;
use crate::{ListError, Position};

impl<T> DequeList<T> {
    /// Inserts `value` before `pos` and returns the new element's position.
    ///
    /// *O*(1) once `pos` is known. Inserting before the end appends.
    #[inline]
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        let at = self.resolve(pos)?;
        let key = self.link_before(at, value);
        Ok(self.position(Some(key)))
    }

    /// Inserts `count` clones of `value` before `pos`.
    ///
    /// Returns the position of the first inserted element, or `pos` when
    /// `count` is zero.
    pub fn insert_n(&mut self, pos: Position, count: usize, value: T) -> Result<Position, ListError>
    where
        T: Clone,
    {
        self.insert_iter(pos, iter::repeat_n(value, count))
    }

    /// Inserts every item of `iter` before `pos`, keeping their order.
    ///
    /// Returns the position of the first inserted element, or `pos` when the
    /// iterator is empty.
    ///
    /// ```
    /// use sc_list::DequeList;
    ///
    /// let mut list = DequeList::from([1, 5]);
    /// let pos = list.advance(list.begin(), 1).unwrap();
    /// let first = list.insert_iter(pos, [2, 3, 4]).unwrap();
    /// assert_eq!(list.get(first), Ok(&2));
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I>(&mut self, pos: Position, iter: I) -> Result<Position, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let at = self.resolve(pos)?;
        let mut first = None;
        for value in iter {
            let key = self.link_before(at, value);
            first.get_or_insert(key);
        }
        Ok(match first {
            Some(key) => self.position(Some(key)),
            None => pos,
        })
    }

    /// Erases the element at `pos` and returns the position that followed it.
    ///
    /// `pos` is invalidated: any later use of it reports
    /// [`ListError::StalePosition`]. Continue from the returned position
    /// instead. Erasing the end position is [`ListError::OutOfRange`].
    ///
    /// ```
    /// use sc_list::{DequeList, ListError};
    ///
    /// let mut list = DequeList::from([1, 2, 3]);
    /// let second = list.advance(list.begin(), 1).unwrap();
    /// let third = list.erase(second).unwrap();
    /// assert_eq!(list.get(third), Ok(&3));
    /// assert_eq!(list.get(second), Err(ListError::StalePosition));
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<Position, ListError> {
        let Some(key) = self.resolve(pos)? else {
            return Err(ListError::OutOfRange);
        };
        match self.unlink(key) {
            Some((_, next)) => Ok(self.position(next)),
            None => Err(ListError::StalePosition),
        }
    }

    /// Erases every element of `[first, last)` and returns `last`.
    ///
    /// The range is validated before anything is erased.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<Position, ListError> {
        self.distance(first, last)?;

        let mut cursor = first.node;
        while cursor != last.node {
            let Some(key) = cursor else {
                break;
            };
            cursor = match self.unlink(key) {
                Some((_, next)) => next,
                None => break,
            };
        }
        self.verify_links();
        Ok(last)
    }

    /// Replaces the whole content with the items of `iter`.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(iter);
    }

    /// Replaces the whole content with `count` clones of `value`.
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign(iter::repeat_n(value, count));
    }

    /// Grows with default values at the back, or truncates from the back.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default);
    }

    /// Grows with clones of `value` at the back, or truncates from the back.
    pub fn resize_fill(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(len, || value.clone());
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut fill: F) {
        while self.len() > len {
            if self.pop_back().is_err() {
                break;
            }
        }
        while self.len() < len {
            self.link_before(None, fill());
        }
    }

    /// Removes every element equal to `value`, returns how many were removed.
    #[inline]
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|item| item == value)
    }

    /// Removes every element matching `predicate`, returns how many were
    /// removed.
    ///
    /// ```
    /// use sc_list::DequeList;
    ///
    /// let mut list: DequeList<i32> = (1..=10).collect();
    /// assert_eq!(list.remove_if(|x| x % 3 == 0), 3);
    /// assert_eq!(list, [1, 2, 4, 5, 7, 8, 10]);
    /// ```
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            cursor = node.next;
            if predicate(&node.value) {
                self.unlink(key);
                removed += 1;
            }
        }
        self.verify_links();
        removed
    }

    /// Removes consecutive duplicates, returns how many were removed.
    ///
    /// Sort first to remove every duplicate.
    #[inline]
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|kept, next| kept == next)
    }

    /// Removes every element for which `same(kept, element)` holds, where
    /// `kept` is the closest preceding element that was kept.
    pub fn unique_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Some(mut kept) = self.head else {
            return 0;
        };
        let mut removed = 0;
        let mut cursor = self.nodes[kept].next;
        while let Some(key) = cursor {
            cursor = self.nodes[key].next;
            if same(&self.nodes[kept].value, &self.nodes[key].value) {
                self.unlink(key);
                removed += 1;
            } else {
                kept = key;
            }
        }
        self.verify_links();
        removed
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{DequeList, ListError};

    #[test]
    fn insert_before_advanced_position() {
        let mut list = DequeList::from([4, 3, 1, 2, 5]);
        let pos = list.advance(list.begin(), 3).unwrap();
        let inserted = list.insert(pos, 40).unwrap();
        assert_eq!(list, [4, 3, 1, 40, 2, 5]);
        assert_eq!(list.get(inserted), Ok(&40));
        assert_eq!(list.get(pos), Ok(&2));
        assert!(list.check_links());
    }

    #[test]
    fn erase_invalidates_only_the_erased_position() {
        let mut list = DequeList::from([4, 3, 1, 40, 2, 5]);
        let first = list.begin();
        let pos = list.position_at(4).unwrap();

        let next = list.erase(pos).unwrap();
        assert_eq!(list, [4, 3, 1, 40, 5]);
        assert_eq!(list.get(next), Ok(&5));

        // Reusing the erased position is rejected, not undefined.
        assert_eq!(list.get(pos), Err(ListError::StalePosition));
        assert_eq!(list.erase(pos), Err(ListError::StalePosition));
        assert_eq!(list.insert(pos, 0), Err(ListError::StalePosition));
        assert_eq!(list.len(), 5);

        assert_eq!(list.get(first), Ok(&4));
        assert_eq!(list.erase(list.end()), Err(ListError::OutOfRange));
    }

    #[test]
    fn stale_slot_reused_by_new_node_stays_stale() {
        let mut list = DequeList::from([1]);
        let old = list.begin();
        list.pop_front().unwrap();
        list.push_back(2);
        assert_eq!(list.get(old), Err(ListError::StalePosition));
        assert_eq!(list.get(list.begin()), Ok(&2));
    }

    #[test]
    fn erase_range_validates_first() {
        let mut list: DequeList<i32> = (1..=6).collect();
        let second = list.position_at(1).unwrap();
        let fifth = list.position_at(4).unwrap();

        assert_eq!(list.erase_range(fifth, second), Err(ListError::InvalidRange));
        assert_eq!(list.len(), 6);

        assert_eq!(list.erase_range(second, fifth), Ok(fifth));
        assert_eq!(list, [1, 5, 6]);
        assert_eq!(list.get(second), Err(ListError::StalePosition));

        let end = list.end();
        assert_eq!(list.erase_range(list.begin(), end), Ok(end));
        assert!(list.is_empty());
        assert!(list.check_links());
    }

    #[test]
    fn insert_n_and_empty_insert() {
        let mut list = DequeList::from([1, 2]);
        let end = list.end();
        let first = list.insert_n(end, 3, 9).unwrap();
        assert_eq!(list, [1, 2, 9, 9, 9]);
        assert_eq!(list.distance(first, list.end()), Ok(3));

        let begin = list.begin();
        assert_eq!(list.insert_n(begin, 0, 7), Ok(begin));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn assign_replaces_content() {
        let mut list = DequeList::from([1, 2, 3]);
        let old = list.begin();
        list.assign([7, 8]);
        assert_eq!(list, [7, 8]);
        assert_eq!(list.get(old), Err(ListError::StalePosition));

        list.assign_n(3, 0);
        assert_eq!(list, [0, 0, 0]);
    }

    #[test]
    fn resize_both_ways() {
        let mut list = DequeList::from([1, 2, 3, 4]);
        list.resize(2);
        assert_eq!(list, [1, 2]);
        list.resize(4);
        assert_eq!(list, [1, 2, 0, 0]);
        list.resize_fill(5, 9);
        assert_eq!(list, [1, 2, 0, 0, 9]);
    }

    #[test]
    fn remove_by_value() {
        let mut list = DequeList::from([3, 1, 3, 3, 2]);
        assert_eq!(list.remove(&3), 3);
        assert_eq!(list, [1, 2]);
        assert_eq!(list.remove(&9), 0);
        assert!(list.check_links());
    }

    #[test]
    fn unique_only_merges_neighbours() {
        let mut list = DequeList::from([1, 1, 2, 1, 1, 1, 3, 3]);
        assert_eq!(list.unique(), 4);
        assert_eq!(list, [1, 2, 1, 3]);
        assert_eq!(list.unique(), 0);

        let mut close = DequeList::from([1, 2, 3, 10, 11]);
        assert_eq!(close.unique_by(|kept, next| next - kept <= 2), 3);
        assert_eq!(close, [1, 10]);
    }
}
