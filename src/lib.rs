//! # `blockdeque` - Block-Ring Double-Ended Queue
//!
//! A double-ended queue of 32-bit integers stored in fixed-size blocks that
//! are addressed through a circular directory of owning handles.
//!
//! ## Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code**: blocks are `Box`ed arrays and the directory is a
//!   `Vec<Option<Box<..>>>`; every release happens through ownership.
//! - **Exclusive ownership**: a block belongs to exactly one deque. Clones copy
//!   blocks, moves transfer the directory and leave the source empty.
//!
//! ### Complexity
//! - Push/pop at either end: amortized O(1)
//! - Indexed access: O(1)
//! - Swap and take: O(1)
//!
//! ### Runtime Checking
//! - Addressing invariants are asserted after every mutation in debug builds
//!   and exposed through [`Deque::is_consistent`].
//!
//! ## Layout
//!
//! 1. **Blocks** (`alloc::block`): `BLOCK_SIZE` values, allocated when the first
//!    element lands in them and freed when the last one leaves.
//! 2. **Directory**: ring of block handles; doubles when both ends meet and
//!    re-lays the live blocks out from slot 0.
//! 3. **Deque**: element count plus the offset of the first element inside the
//!    first block. Element `i` lives at absolute position `start_offset + i`.
//!
//! ## Features
//!
//! - `tracing`: emits `tracing` events on directory growth and block
//!   allocation/release.
//! - `proptest`: exposes `strategy`, `proptest` strategies producing deques
//!   in arbitrary layouts.
//! - `alloc-mimalloc`: benchmarks run on the `mimalloc` global allocator.
//!
//! ## Example
//!
//! ```rust
//! use blockdeque::{deque, DequeError};
//!
//! let mut d = deque![1, 2, 3];
//! d.push_front(0);
//! assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! assert_eq!(d.pop_back(), Ok(3));
//! assert_eq!(d.len(), 3);
//!
//! assert_eq!(d.get(3), Err(DequeError::IndexOutOfRange { index: 3, len: 3 }));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;
mod trace;

pub mod alloc;
pub mod collections;
pub mod error;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use alloc::{Value, BLOCK_SIZE};
pub use collections::{Deque, DequeLayout, IntoIter, Iter, IterMut};
pub use error::{DequeError, Result};

// Compile-time assertions for layout assumptions.
const _: () = {
    use core::mem;

    assert!(BLOCK_SIZE != 0);
    assert!(BLOCK_SIZE.is_power_of_two());

    // One block is a single 512-byte allocation.
    assert!(mem::size_of::<[Value; BLOCK_SIZE]>() == 512);

    // Block handles use the null niche: an empty slot costs one pointer.
    assert!(mem::size_of::<Option<crate::alloc::Block>>() == mem::size_of::<usize>());
};

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Deque>();
};
