//! Traversal and positional access.

use super::DequeList;
use crate::{ListError, Position};

impl<T> DequeList<T> {
    /// Returns the position of the first element, or [`end`](Self::end)
    /// when the list is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position(self.head)
    }

    /// Returns the past-the-end position.
    #[inline]
    pub fn end(&self) -> Position {
        self.position(None)
    }

    /// Steps one node forward. Stepping from the end is
    /// [`ListError::OutOfRange`].
    pub fn next(&self, pos: Position) -> Result<Position, ListError> {
        match self.resolve(pos)? {
            Some(key) => Ok(self.position(self.nodes[key].next)),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Steps one node backward. Stepping from the first element is
    /// [`ListError::OutOfRange`]; stepping from the end yields the last
    /// element.
    pub fn prev(&self, pos: Position) -> Result<Position, ListError> {
        let prev = match self.resolve(pos)? {
            Some(key) => self.nodes[key].prev,
            None => self.tail,
        };
        match prev {
            Some(key) => Ok(self.position(Some(key))),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Moves `pos` by `steps` nodes, forward when positive. *O*(|steps|).
    ///
    /// ```
    /// use sc_list::{DequeList, ListError};
    ///
    /// let list = DequeList::from(['a', 'b', 'c']);
    /// let pos = list.advance(list.begin(), 2).unwrap();
    /// assert_eq!(list.get(pos), Ok(&'c'));
    ///
    /// let back = list.advance(list.end(), -3).unwrap();
    /// assert_eq!(back, list.begin());
    ///
    /// assert_eq!(list.advance(pos, 2), Err(ListError::OutOfRange));
    /// ```
    pub fn advance(&self, pos: Position, steps: isize) -> Result<Position, ListError> {
        self.resolve(pos)?;
        let mut pos = pos;
        if steps >= 0 {
            for _ in 0..steps {
                pos = self.next(pos)?;
            }
        } else {
            for _ in 0..steps.unsigned_abs() {
                pos = self.prev(pos)?;
            }
        }
        Ok(pos)
    }

    /// Returns the position of the element at `index`, walking from the
    /// nearer end. `index == len()` yields the end position.
    pub fn position_at(&self, index: usize) -> Result<Position, ListError> {
        let len = self.len();
        if index > len {
            return Err(ListError::OutOfRange);
        }
        if index <= len / 2 {
            self.advance(self.begin(), index as isize)
        } else {
            self.advance(self.end(), -((len - index) as isize))
        }
    }

    /// Counts the steps from `first` to `last`. *O*(*n*).
    ///
    /// Returns [`ListError::InvalidRange`] if `last` does not follow `first`.
    pub fn distance(&self, first: Position, last: Position) -> Result<usize, ListError> {
        let target = self.resolve(last)?;
        let mut cursor = self.resolve(first)?;
        let mut steps = 0;
        while cursor != target {
            match cursor {
                Some(key) => cursor = self.nodes[key].next,
                None => return Err(ListError::InvalidRange),
            }
            steps += 1;
        }
        Ok(steps)
    }

    /// Returns the element at `pos`. The end position holds no element.
    pub fn get(&self, pos: Position) -> Result<&T, ListError> {
        match self.resolve(pos)? {
            Some(key) => Ok(&self.nodes[key].value),
            None => Err(ListError::OutOfRange),
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, ListError> {
        match self.resolve(pos)? {
            Some(key) => Ok(&mut self.nodes[key].value),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Returns the position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.keys()
            .find(|key| self.nodes[*key].value == *value)
            .map(|key| self.position(Some(key)))
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }
}

// -----------------------------------------------------------------------------
// Tests
