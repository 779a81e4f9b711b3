//! Generic algorithms over a `[first, last)` range.
//!
//! A range is any slice: a whole [`Sequence`](crate::Sequence) through
//! [`as_slice`](crate::Sequence::as_slice), or a checked sub-range through
//! [`slice`](crate::Sequence::slice). Positions returned by these functions
//! are relative to the slice that was passed in, and `None` plays the role
//! of the "not found" sentinel.
//!
//! The searching functions (`binary_search`, `lower_bound`, `upper_bound`)
//! require the range to be sorted in ascending order. The plain variants
//! trust the caller and give unspecified answers on unsorted input; the
//! `checked_` variants verify the order first.
//!
//! ```
//! use sc_seq::{Sequence, algo};
//!
//! let mut seq = Sequence::from([67, 2, 3, 4, 4, 4, 5]);
//! algo::sort(seq.as_mut_slice());
//! assert_eq!(seq, [2, 3, 4, 4, 4, 5, 67]);
//!
//! assert_eq!(algo::lower_bound(seq.as_slice(), &4), 2);
//! assert_eq!(algo::upper_bound(seq.as_slice(), &4), 5);
//! assert_eq!(algo::accumulate(seq.as_slice(), 0), 89);
//! ```

use core::cmp::Ordering;
use core::ops::Add;

use crate::SequenceError;

// -----------------------------------------------------------------------------
// Ordering

/// Sorts the range in ascending order. Stable, *O*(*n* log *n*).
#[inline]
pub fn sort<T: Ord>(range: &mut [T]) {
    range.sort();
}

/// Sorts the range with a comparator. Stable.
#[inline]
pub fn sort_by<T, F>(range: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    range.sort_by(compare);
}

/// Sorts the range in parallel. Stable.
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
#[inline]
pub fn par_sort<T: Ord + Send>(range: &mut [T]) {
    use rayon::slice::ParallelSliceMut;
    range.par_sort();
}

#[inline]
pub fn reverse<T>(range: &mut [T]) {
    range.reverse();
}

/// Returns `true` if every element is not greater than its successor.
#[inline]
pub fn is_sorted<T: Ord>(range: &[T]) -> bool {
    is_sorted_by(range, T::cmp)
}

pub fn is_sorted_by<T, F>(range: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    range
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

// -----------------------------------------------------------------------------
// Extremes

/// Returns the position of the greatest element.
///
/// On ties the first occurrence wins. Returns `None` for an empty range.
///
/// ```
/// use sc_seq::algo;
///
/// assert_eq!(algo::max_element(&[3, 9, 1, 9]), Some(1));
/// assert_eq!(algo::max_element::<i32>(&[]), None);
/// ```
#[inline]
pub fn max_element<T: Ord>(range: &[T]) -> Option<usize> {
    max_element_by(range, T::cmp)
}

pub fn max_element_by<T, F>(range: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut iter = range.iter().enumerate();
    let (mut best, mut best_value) = iter.next()?;
    for (index, value) in iter {
        if compare(value, best_value) == Ordering::Greater {
            best = index;
            best_value = value;
        }
    }
    Some(best)
}

/// Returns the position of the smallest element.
///
/// On ties the first occurrence wins. Returns `None` for an empty range.
#[inline]
pub fn min_element<T: Ord>(range: &[T]) -> Option<usize> {
    min_element_by(range, T::cmp)
}

pub fn min_element_by<T, F>(range: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut iter = range.iter().enumerate();
    let (mut best, mut best_value) = iter.next()?;
    for (index, value) in iter {
        if compare(value, best_value) == Ordering::Less {
            best = index;
            best_value = value;
        }
    }
    Some(best)
}

// -----------------------------------------------------------------------------
// Folding & counting

/// Left fold of the range with `+`, seeded with `init`.
#[inline]
pub fn accumulate<T, A>(range: &[T], init: A) -> A
where
    A: for<'a> Add<&'a T, Output = A>,
{
    range.iter().fold(init, |acc, value| acc + value)
}

/// Left fold of the range with `f`, seeded with `init`.
///
/// ```
/// use sc_seq::algo;
///
/// let product = algo::accumulate_by(&[1, 2, 3, 4], 1, |acc, x| acc * x);
/// assert_eq!(product, 24);
/// ```
#[inline]
pub fn accumulate_by<T, A, F>(range: &[T], init: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    range.iter().fold(init, f)
}

/// Returns the position of the first element equal to `value`.
#[inline]
pub fn find<T: PartialEq>(range: &[T], value: &T) -> Option<usize> {
    range.iter().position(|item| item == value)
}

#[inline]
pub fn find_if<T, P>(range: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    range.iter().position(predicate)
}

/// Returns the number of elements equal to `value`.
#[inline]
pub fn count<T: PartialEq>(range: &[T], value: &T) -> usize {
    range.iter().filter(|item| *item == value).count()
}

#[inline]
pub fn count_if<T, P>(range: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    range.iter().filter(|item| predicate(item)).count()
}

// -----------------------------------------------------------------------------
// Sorted search

/// Returns the first position whose element is not less than `value`.
///
/// Requires an ascending range, *O*(log *n*).
#[inline]
pub fn lower_bound<T: Ord>(range: &[T], value: &T) -> usize {
    range.partition_point(|item| item < value)
}

/// Returns the first position whose element is strictly greater than `value`.
///
/// Requires an ascending range, *O*(log *n*).
#[inline]
pub fn upper_bound<T: Ord>(range: &[T], value: &T) -> usize {
    range.partition_point(|item| item <= value)
}

/// Returns `true` if an element equal to `value` exists.
///
/// Requires an ascending range, *O*(log *n*).
#[inline]
pub fn binary_search<T: Ord>(range: &[T], value: &T) -> bool {
    range
        .get(lower_bound(range, value))
        .is_some_and(|item| item == value)
}

fn ensure_sorted<T: Ord>(range: &[T]) -> Result<(), SequenceError> {
    if is_sorted(range) {
        Ok(())
    } else {
        log::debug!(
            "sorted search rejected an unordered range of {} elements",
            range.len()
        );
        Err(SequenceError::Unsorted)
    }
}

/// [`lower_bound`] that verifies the ascending order first, *O*(*n*).
///
/// ```
/// use sc_seq::{SequenceError, algo};
///
/// assert_eq!(algo::checked_lower_bound(&[1, 3, 5], &4), Ok(2));
/// assert_eq!(
///     algo::checked_lower_bound(&[5, 3, 1], &4),
///     Err(SequenceError::Unsorted)
/// );
/// ```
pub fn checked_lower_bound<T: Ord>(range: &[T], value: &T) -> Result<usize, SequenceError> {
    ensure_sorted(range)?;
    Ok(lower_bound(range, value))
}

/// [`upper_bound`] that verifies the ascending order first, *O*(*n*).
pub fn checked_upper_bound<T: Ord>(range: &[T], value: &T) -> Result<usize, SequenceError> {
    ensure_sorted(range)?;
    Ok(upper_bound(range, value))
}

/// [`binary_search`] that verifies the ascending order first, *O*(*n*).
pub fn checked_binary_search<T: Ord>(range: &[T], value: &T) -> Result<bool, SequenceError> {
    ensure_sorted(range)?;
    Ok(binary_search(range, value))
}

// -----------------------------------------------------------------------------
// Rearranging

/// Moves the first element of every run of equal elements to the front.
///
/// Returns the new logical end. Elements past it are leftovers in
/// unspecified order; the caller erases them separately. Only consecutive
/// duplicates are merged, so sort first for a global deduplication.
///
/// ```
/// use sc_seq::{Sequence, algo};
///
/// let mut seq = Sequence::from([1, 1, 2, 2, 3, 1]);
/// let end = algo::unique(seq.as_mut_slice());
/// assert_eq!(end, 4);
/// seq.erase_range(end..).unwrap();
/// assert_eq!(seq, [1, 2, 3, 1]);
/// ```
#[inline]
pub fn unique<T: PartialEq>(range: &mut [T]) -> usize {
    unique_by(range, |a, b| a == b)
}

pub fn unique_by<T, F>(range: &mut [T], mut same: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if range.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..range.len() {
        if !same(&range[read], &range[write - 1]) {
            range.swap(read, write);
            write += 1;
        }
    }
    write
}

/// Rearranges the range into the lexicographically next permutation.
///
/// Returns `false` if the range already was the greatest permutation; it is
/// then reset to the smallest one (ascending order).
///
/// ```
/// use sc_seq::algo;
///
/// let mut digits = [1, 3, 2];
/// assert!(algo::next_permutation(&mut digits));
/// assert_eq!(digits, [2, 1, 3]);
///
/// let mut last = [3, 2, 1];
/// assert!(!algo::next_permutation(&mut last));
/// assert_eq!(last, [1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(range: &mut [T]) -> bool {
    let len = range.len();
    if len < 2 {
        return false;
    }

    // Head of the longest non-increasing suffix.
    let mut head = len - 1;
    while head > 0 && range[head - 1] >= range[head] {
        head -= 1;
    }
    if head == 0 {
        range.reverse();
        return false;
    }

    let pivot = head - 1;
    let mut successor = len - 1;
    while range[successor] <= range[pivot] {
        successor -= 1;
    }
    range.swap(pivot, successor);
    range[head..].reverse();
    true
}

/// Rearranges the range into the lexicographically previous permutation.
///
/// Returns `false` if the range already was the smallest permutation; it is
/// then reset to the greatest one (descending order).
pub fn prev_permutation<T: Ord>(range: &mut [T]) -> bool {
    let len = range.len();
    if len < 2 {
        return false;
    }

    // Head of the longest non-decreasing suffix.
    let mut head = len - 1;
    while head > 0 && range[head - 1] <= range[head] {
        head -= 1;
    }
    if head == 0 {
        range.reverse();
        return false;
    }

    let pivot = head - 1;
    let mut predecessor = len - 1;
    while range[predecessor] >= range[pivot] {
        predecessor -= 1;
    }
    range.swap(pivot, predecessor);
    range[head..].reverse();
    true
}

/// Returns the signed number of steps from `first` to `last`.
#[inline]
pub const fn distance(first: usize, last: usize) -> isize {
    if last >= first {
        (last - first) as isize
    } else {
        -((first - last) as isize)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn sort_reverse_extremes() {
        let mut seq = Sequence::from([67, 2, 3, 4, 4, 4, 5]);
        seq.sort();
        assert_eq!(seq, [2, 3, 4, 4, 4, 5, 67]);
        assert_eq!(max_element(seq.as_slice()).map(|i| seq[i]), Some(67));
        assert_eq!(min_element(seq.as_slice()).map(|i| seq[i]), Some(2));
        assert_eq!(accumulate(seq.as_slice(), 0), 89);

        seq.reverse();
        assert_eq!(seq, [67, 5, 4, 4, 4, 3, 2]);
    }

    #[test]
    fn ties_pick_first_occurrence() {
        assert_eq!(max_element(&[1, 7, 3, 7]), Some(1));
        assert_eq!(min_element(&[4, 0, 2, 0]), Some(1));
        assert_eq!(min_element::<u8>(&[]), None);
    }

    #[test]
    fn extremes_with_comparator() {
        let words = ["pear", "fig", "banana", "kiwi"];
        assert_eq!(max_element_by(&words, |a, b| a.len().cmp(&b.len())), Some(2));
        assert_eq!(min_element_by(&words, |a, b| a.len().cmp(&b.len())), Some(1));
    }

    #[test]
    fn fold_with_owned_accumulator() {
        let joined = accumulate_by(&["a", "b", "c"], String::new(), |mut acc, part| {
            acc.push_str(part);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn find_and_count() {
        let range = [5, 3, 5, 1];
        assert_eq!(find(&range, &5), Some(0));
        assert_eq!(find(&range, &9), None);
        assert_eq!(find_if(&range, |x| *x < 5), Some(1));
        assert_eq!(count(&range, &5), 2);
        assert_eq!(count_if(&range, |x| x % 2 == 1), 4);
    }

    #[test]
    fn bounds_on_sorted_range() {
        let range = [1, 2, 4, 4, 4, 8];
        assert_eq!(lower_bound(&range, &4), 2);
        assert_eq!(upper_bound(&range, &4), 5);
        assert_eq!(lower_bound(&range, &0), 0);
        assert_eq!(upper_bound(&range, &9), range.len());
        assert_eq!(lower_bound(&range, &3), upper_bound(&range, &3));

        assert!(binary_search(&range, &8));
        assert!(!binary_search(&range, &3));
        assert!(!binary_search::<i32>(&[], &3));
    }

    #[test]
    fn checked_search_rejects_unsorted() {
        let unsorted = [3, 1, 2];
        assert_eq!(checked_binary_search(&unsorted, &1), Err(SequenceError::Unsorted));
        assert_eq!(checked_upper_bound(&unsorted, &1), Err(SequenceError::Unsorted));
        assert_eq!(checked_binary_search(&[1, 2, 3], &2), Ok(true));
    }

    #[test]
    fn unique_is_idempotent() {
        let mut seq = Sequence::from([1, 1, 2, 3, 3, 3, 4]);
        seq.dedup();
        let once = seq.clone();
        assert_eq!(seq.dedup(), 0);
        assert_eq!(seq, once);
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn unique_keeps_non_adjacent_duplicates() {
        let mut range = [2, 2, 1, 2];
        let end = unique(&mut range);
        assert_eq!(&range[..end], &[2, 1, 2]);
        assert_eq!(unique::<i32>(&mut []), 0);
    }

    #[test]
    fn permutations_cycle() {
        let mut range = [1, 2, 3];
        let mut seen = Vec::new();
        loop {
            seen.push(range);
            if !next_permutation(&mut range) {
                break;
            }
        }
        assert_eq!(
            seen,
            [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]]
        );
        // Wrapped back to the smallest ordering.
        assert_eq!(range, [1, 2, 3]);

        assert!(!prev_permutation(&mut range));
        assert_eq!(range, [3, 2, 1]);
        assert!(prev_permutation(&mut range));
        assert_eq!(range, [3, 1, 2]);
    }

    #[test]
    fn permutations_with_duplicates() {
        let mut range = [1, 1, 2];
        let mut total = 1;
        while next_permutation(&mut range) {
            total += 1;
        }
        assert_eq!(total, 3);
        assert_eq!(range, [1, 1, 2]);
    }

    #[test]
    fn signed_distance() {
        assert_eq!(distance(2, 7), 5);
        assert_eq!(distance(7, 2), -5);
        assert_eq!(distance(3, 3), 0);
    }

    #[test]
    fn sortedness() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
        assert!(is_sorted_by(&[3, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
    }
}
