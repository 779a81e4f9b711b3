//! Contiguous growable array with checked positional access.
//!
//! [`Sequence`] owns a single backing store. Elements occupy `[0, len)` and
//! the capacity only grows (geometrically) unless [`Sequence::shrink_to_fit`]
//! is requested.

use alloc::vec::{self, Vec};
use core::cmp::Ordering;
use core::fmt;
use core::iter;
use core::mem;
use core::ops::{Bound, Index, IndexMut, Range, RangeBounds};
use core::slice;

use crate::SequenceError;
use crate::algo;

// -----------------------------------------------------------------------------
// Config

/// Capacity multiplier applied when an insertion overflows the store.
const GROWTH_FACTOR: usize = 2;

/// The smallest non-zero capacity for an element of `elem_size` bytes.
///
/// Tiny elements start with a larger store because allocators round small
/// requests up anyway; huge elements start with a single slot.
const fn min_non_zero_cap(elem_size: usize) -> usize {
    if elem_size == 1 {
        8
    } else if elem_size <= 1024 {
        4
    } else {
        1
    }
}

/// Converts any range expression into `start..end`, checked against `len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, SequenceError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > end || end > len {
        return Err(SequenceError::InvalidRange { start, end, len });
    }
    Ok(start..end)
}

// -----------------------------------------------------------------------------
// Sequence

/// A contiguous, index-addressable, growable container.
///
/// Appending is amortized *O*(1); inserting or erasing in the middle shifts
/// the trailing elements and costs *O*(*n* - *pos*).
///
/// Positions are plain indices. A position is valid for reading when it is
/// `< len()` and valid as an insertion point when it is `<= len()`.
///
/// # Examples
///
/// ```
/// use sc_seq::Sequence;
///
/// let mut seq = Sequence::new();
/// seq.push_back(67);
/// seq.push_back(23);
/// seq.push_back(45);
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.back(), Ok(&45));
///
/// seq.insert(1, 6).unwrap();
/// assert_eq!(seq, [67, 6, 23, 45]);
///
/// assert_eq!(seq.erase(0), Ok(67));
/// assert!(seq.at(3).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    buf: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty `Sequence`.
    ///
    /// This function does not allocate any memory.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty `Sequence` able to hold `capacity` elements without
    /// reallocating.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let seq = Sequence::<u64>::with_capacity(10);
    /// assert!(seq.is_empty());
    /// assert!(seq.capacity() >= 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sequence of `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut buf = Vec::with_capacity(len);
        buf.resize_with(len, T::default);
        Self { buf }
    }

    /// Creates a sequence of `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self {
            buf: alloc::vec![value; len],
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of elements the sequence can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the theoretical maximum number of elements.
    ///
    /// Allocations are limited to `isize::MAX` bytes; zero-sized elements
    /// are only limited by the length counter.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let seq = Sequence::<u32>::new();
    /// assert_eq!(seq.max_size(), isize::MAX as usize / 4);
    /// assert_eq!(Sequence::<()>::new().max_size(), usize::MAX);
    /// ```
    #[inline]
    pub const fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self, additional: usize) {
        let len = self.buf.len();
        let old_cap = self.buf.capacity();
        let new_cap = old_cap
            .saturating_mul(GROWTH_FACTOR)
            .max(len.saturating_add(additional))
            .max(min_non_zero_cap(mem::size_of::<T>()));

        self.buf.reserve_exact(new_cap - len);
        log::trace!(
            "Sequence grows from {old_cap} to {} slots ({len} in use)",
            self.buf.capacity()
        );
    }

    /// Makes room for `additional` more elements following the growth policy.
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        if self.buf.capacity() - self.buf.len() < additional {
            self.grow(additional);
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.buf.len() {
            Ok(())
        } else {
            Err(SequenceError::OutOfRange {
                index,
                len: self.buf.len(),
            })
        }
    }

    #[inline]
    fn check_position(&self, pos: usize) -> Result<(), SequenceError> {
        if pos <= self.buf.len() {
            Ok(())
        } else {
            Err(SequenceError::OutOfRange {
                index: pos,
                len: self.buf.len(),
            })
        }
    }

    /// Appends an element to the back of the sequence.
    ///
    /// When the sequence is full the store is reallocated with at least
    /// twice the capacity and the existing elements are moved over.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::new();
    /// seq.push_back(1);
    /// assert_eq!(seq.capacity(), 4);
    ///
    /// seq.extend([2, 3, 4, 5]);
    /// assert_eq!(seq.capacity(), 8);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.reserve_for(1);
        self.buf.push(value);
    }

    /// Removes and returns the last element.
    ///
    /// ```
    /// use sc_seq::{Sequence, SequenceError};
    ///
    /// let mut seq = Sequence::from([1, 2]);
    /// assert_eq!(seq.pop_back(), Ok(2));
    /// assert_eq!(seq.pop_back(), Ok(1));
    /// assert_eq!(seq.pop_back(), Err(SequenceError::Empty { op: "pop_back" }));
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        self.buf.pop().ok_or(SequenceError::Empty { op: "pop_back" })
    }

    /// Inserts `value` before position `pos`, shifting the tail right.
    ///
    /// `pos == len()` appends. Any larger position is rejected.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), SequenceError> {
        self.check_position(pos)?;
        self.reserve_for(1);
        self.buf.insert(pos, value);
        Ok(())
    }

    /// Inserts `count` clones of `value` before position `pos`.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([67, 23, 45, 421, 6]);
    /// seq.insert_n(3, 3, 69).unwrap();
    /// assert_eq!(seq, [67, 23, 45, 69, 69, 69, 421, 6]);
    /// ```
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.check_position(pos)?;
        self.reserve_for(count);
        self.buf.splice(pos..pos, iter::repeat_n(value, count));
        Ok(())
    }

    /// Inserts clones of every element of `src` before position `pos`.
    pub fn insert_slice(&mut self, pos: usize, src: &[T]) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.check_position(pos)?;
        self.reserve_for(src.len());
        self.buf.splice(pos..pos, src.iter().cloned());
        Ok(())
    }

    /// Inserts every item of `iter` before position `pos`, keeping their order.
    pub fn insert_iter<I>(&mut self, pos: usize, iter: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(pos)?;
        let iter = iter.into_iter();
        self.reserve_for(iter.size_hint().0);
        self.buf.splice(pos..pos, iter);
        Ok(())
    }

    /// Inserts clones of the sub-range `src` of this sequence before `pos`.
    ///
    /// Both the source range and the insertion point refer to the sequence
    /// as it was before the call.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// seq.insert_within(0, 1..).unwrap();
    /// assert_eq!(seq, [2, 3, 1, 2, 3]);
    ///
    /// // The source range must lie inside the sequence.
    /// assert!(seq.insert_within(0, 3..8).is_err());
    /// ```
    pub fn insert_within<R>(&mut self, pos: usize, src: R) -> Result<(), SequenceError>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        self.check_position(pos)?;
        let src = resolve_range(src, self.buf.len())?;
        let copied = self.buf[src].to_vec();
        self.reserve_for(copied.len());
        self.buf.splice(pos..pos, copied);
        Ok(())
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    #[inline]
    pub fn erase(&mut self, pos: usize) -> Result<T, SequenceError> {
        self.check_index(pos)?;
        Ok(self.buf.remove(pos))
    }

    /// Removes the elements in `range`.
    ///
    /// Returns the position of the element that followed the erased run,
    /// which is the start of the range.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3, 4, 5]);
    /// assert_eq!(seq.erase_range(1..3), Ok(1));
    /// assert_eq!(seq, [1, 4, 5]);
    /// assert!(seq.erase_range(2..9).is_err());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, SequenceError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.buf.len())?;
        let next = range.start;
        self.buf.drain(range);
        Ok(next)
    }

    /// Returns the element at `index`, or [`SequenceError::OutOfRange`].
    ///
    /// ```
    /// use sc_seq::{Sequence, SequenceError};
    ///
    /// let seq = Sequence::from([10, 20, 30]);
    /// assert_eq!(seq.at(2), Ok(&30));
    /// assert_eq!(seq.at(3), Err(SequenceError::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.buf.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.buf.len(),
        })
    }

    /// Returns a mutable reference to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let len = self.buf.len();
        self.buf
            .get_mut(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    #[inline]
    pub fn front(&self) -> Result<&T, SequenceError> {
        self.buf.first().ok_or(SequenceError::Empty { op: "front" })
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, SequenceError> {
        self.buf.first_mut().ok_or(SequenceError::Empty { op: "front" })
    }

    #[inline]
    pub fn back(&self) -> Result<&T, SequenceError> {
        self.buf.last().ok_or(SequenceError::Empty { op: "back" })
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, SequenceError> {
        self.buf.last_mut().ok_or(SequenceError::Empty { op: "back" })
    }

    /// Resizes the sequence to exactly `len` elements.
    ///
    /// New slots are filled with `T::default()`, surplus elements are dropped.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3, 4, 5]);
    /// seq.resize(3);
    /// assert_eq!(seq, [1, 2, 3]);
    /// seq.resize(5);
    /// assert_eq!(seq, [1, 2, 3, 0, 0]);
    /// ```
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        if len > self.buf.len() {
            self.reserve_for(len - self.buf.len());
        }
        self.buf.resize_with(len, T::default);
    }

    /// Resizes the sequence to exactly `len` elements, cloning `value` into
    /// new slots.
    pub fn resize_fill(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        if len > self.buf.len() {
            self.reserve_for(len - self.buf.len());
        }
        self.buf.resize(len, value);
    }

    /// Ensures `capacity() >= capacity`.
    ///
    /// Unlike `Vec::reserve` the argument is the total capacity, not an
    /// additional amount. Does nothing if the capacity is already sufficient.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// seq.reserve(8);
    /// assert!(seq.capacity() >= 8);
    /// assert_eq!(seq.len(), 3);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.buf.capacity() {
            self.buf.reserve_exact(capacity - self.buf.len());
        }
    }

    /// Asks the allocator to drop unused capacity.
    ///
    /// The resulting capacity is at least `len()` and may be larger.
    pub fn shrink_to_fit(&mut self) {
        let before = self.buf.capacity();
        self.buf.shrink_to_fit();
        let after = self.buf.capacity();
        if after < before {
            log::debug!("Sequence released {} unused slots", before - after);
        }
    }

    /// Drops every element. The capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Exchanges the contents (and capacities) of two sequences in *O*(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
    }

    /// Returns the initialized part of the backing store.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns a raw pointer to the backing store.
    ///
    /// The pointer is valid for `len()` reads until the next reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns the `[first, last)` sub-range, or [`SequenceError::InvalidRange`].
    ///
    /// ```
    /// use sc_seq::{Sequence, algo};
    ///
    /// let seq = Sequence::from([4, 9, 1, 7]);
    /// let middle = seq.slice(1..3).unwrap();
    /// assert_eq!(algo::max_element(middle), Some(0));
    /// assert!(seq.slice(2..5).is_err());
    /// ```
    pub fn slice<R>(&self, range: R) -> Result<&[T], SequenceError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.buf.len())?;
        Ok(&self.buf[range])
    }

    pub fn slice_mut<R>(&mut self, range: R) -> Result<&mut [T], SequenceError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.buf.len())?;
        Ok(&mut self.buf[range])
    }

    /// Returns the signed number of steps from position `first` to `last`.
    ///
    /// Both positions must lie in `[0, len()]`.
    pub fn distance(&self, first: usize, last: usize) -> Result<isize, SequenceError> {
        self.check_position(first)?;
        self.check_position(last)?;
        Ok(algo::distance(first, last))
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Converts the sequence into a `Vec` without copying.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    /// Sorts the whole sequence. Stable.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        algo::sort(&mut self.buf);
    }

    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::sort_by(&mut self.buf, compare);
    }

    /// Sorts the whole sequence on the rayon thread pool. Stable.
    #[cfg(feature = "rayon")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
    #[inline]
    pub fn par_sort(&mut self)
    where
        T: Ord + Send,
    {
        algo::par_sort(&mut self.buf);
    }

    #[inline]
    pub fn reverse(&mut self) {
        algo::reverse(&mut self.buf);
    }

    /// Removes consecutive duplicates and returns how many were dropped.
    ///
    /// This is [`algo::unique`] followed by erasing the leftover tail. Sort
    /// first for a global deduplication.
    ///
    /// ```
    /// use sc_seq::Sequence;
    ///
    /// let mut seq = Sequence::from([2, 3, 4, 4, 4, 5, 4]);
    /// assert_eq!(seq.dedup(), 2);
    /// assert_eq!(seq, [2, 3, 4, 5, 4]);
    /// ```
    pub fn dedup(&mut self) -> usize
    where
        T: PartialEq,
    {
        let end = algo::unique(&mut self.buf);
        let removed = self.buf.len() - end;
        self.buf.truncate(end);
        removed
    }

    /// See [`algo::next_permutation`].
    #[inline]
    pub fn next_permutation(&mut self) -> bool
    where
        T: Ord,
    {
        algo::next_permutation(&mut self.buf)
    }

    /// See [`algo::prev_permutation`].
    #[inline]
    pub fn prev_permutation(&mut self) -> bool
    where
        T: Ord,
    {
        algo::prev_permutation(&mut self.buf)
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

/// Unchecked-contract indexing.
///
/// Callers guarantee `index < len()`; a violated contract panics with the
/// [`SequenceError::OutOfRange`] message. Use [`Sequence::at`] for a
/// recoverable error.
impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.buf.get(index) {
            Some(value) => value,
            None => SequenceError::OutOfRange {
                index,
                len: self.buf.len(),
            }
            .handle_error(),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.buf.len();
        match self.buf.get_mut(index) {
            Some(value) => value,
            None => SequenceError::OutOfRange { index, len }.handle_error(),
        }
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Sequence<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.buf[..] == other[..]
    }
}

impl<T, U> PartialEq<[U]> for Sequence<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.buf[..] == other[..]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buf
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self {
            buf: Vec::from(array),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self {
            buf: slice.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(seq: Sequence<T>) -> Self {
        seq.buf
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_for(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        Extend::<T>::extend(self, iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}

// -----------------------------------------------------------------------------
// Tests
