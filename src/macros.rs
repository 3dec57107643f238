/// Creates a [`Deque`](crate::Deque) from a list of values.
///
/// ```rust
/// use blockdeque::deque;
///
/// let d = deque![1, 2, 3];
/// assert_eq!(d.len(), 3);
///
/// let zeros = deque![0; 200];
/// assert_eq!(zeros.len(), 200);
///
/// let empty = deque![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::new()
    };
    ($value:expr; $len:expr) => {{
        let mut deque = $crate::Deque::with_len($len);
        deque.fill($value);
        deque
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Deque::from([$($value),+])
    };
}
