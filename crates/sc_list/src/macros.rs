/// Creates a [`DequeList`](crate::DequeList) containing the arguments.
///
/// ```
/// use sc_list::{DequeList, list};
///
/// let empty: DequeList<u8> = list![];
/// assert!(empty.is_empty());
///
/// let numbers = list![4, 3, 1, 2, 5];
/// assert_eq!(numbers.front(), Ok(&4));
/// assert_eq!(numbers.back(), Ok(&5));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::DequeList::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DequeList::from([$($x),+])
    };
}
