//! Collections built on the block storage in [`crate::alloc`].
//!
//! - `deque`: double-ended queue over a ring of fixed-size blocks

pub mod deque;

pub use deque::{Deque, DequeLayout, IntoIter, Iter, IterMut};
