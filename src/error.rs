//! Error type shared by every fallible [`Deque`](crate::Deque) operation.

/// The error type for recoverable deque failures.
///
/// Allocation failure is not represented here: running out of memory aborts
/// through the global allocator, the same way `Vec` and `Box` behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// An index outside `[0, len)` was requested.
    IndexOutOfRange {
        /// The requested logical index.
        index: usize,
        /// The length of the deque at the time of the request.
        len: usize,
    },
    /// A pop was attempted on a deque with no elements.
    Empty,
}

impl core::fmt::Display for DequeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for deque of length {len}")
            }
            Self::Empty => f.write_str("deque is empty"),
        }
    }
}

impl std::error::Error for DequeError {}

/// Result alias used throughout the crate.
pub type Result<T, E = DequeError> = core::result::Result<T, E>;
