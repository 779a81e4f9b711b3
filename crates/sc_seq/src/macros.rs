/// Creates a [`Sequence`](crate::Sequence) containing the arguments.
///
/// Mirrors the forms of `alloc::vec!`.
///
/// ```
/// use sc_seq::{Sequence, seq};
///
/// let empty: Sequence<i32> = seq![];
/// assert!(empty.is_empty());
///
/// let filled = seq![7; 3];
/// assert_eq!(filled.as_slice(), &[7, 7, 7]);
///
/// let listed = seq![1, 2, 3];
/// assert_eq!(listed.len(), 3);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}
