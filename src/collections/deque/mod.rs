//! `Deque` — a double-ended queue stored as a ring of fixed-size blocks.
//!
//! Elements live in blocks of [`BLOCK_SIZE`] values. A [`Directory`] holds
//! the owning handles of the live blocks in a circular slot array, so both
//! ends can gain or lose a block without shifting the others.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: amortized O(1); a block is allocated only when an
//!   end crosses a block boundary, and the directory doubles when it runs out
//!   of slots
//! - Indexed access: O(1) (one division, one modulo)
//! - Clone: O(blocks), copies whole blocks
//! - Swap / take: O(1)
//!
//! Invariants (checked in full by [`Deque::is_consistent`]; debug builds
//! assert the constant-time part after every mutation):
//! - element `i` sits in block `(start_offset + i) / BLOCK_SIZE` after the
//!   directory start, at offset `(start_offset + i) % BLOCK_SIZE`
//! - the live blocks are exactly the blocks touched by `[0, len)`
//! - an empty deque owns no blocks and has `start_offset == 0`

mod directory;
mod index;
mod iter;
mod serialize;

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::Serialize;

use crate::alloc::block::{copy_block, new_block};
use crate::alloc::{Value, BLOCK_SIZE};
use crate::error::{DequeError, Result};
use crate::trace::trace_event;

use directory::Directory;
use index::{locate, Position};

pub use iter::{IntoIter, Iter, IterMut};

/// A double-ended queue of [`Value`]s backed by a ring of fixed-size blocks.
#[derive(Default)]
pub struct Deque {
    blocks: Directory,
    len: usize,
    start_offset: usize,
}

/// A snapshot of a deque's internal addressing state.
///
/// Useful for asserting on allocation behavior in tests and for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DequeLayout {
    /// Number of elements.
    pub len: usize,
    /// Number of directory slots.
    pub capacity: usize,
    /// Number of slots currently holding a block.
    pub allocated_blocks: usize,
    /// Slot holding the first element's block.
    pub start_block: usize,
    /// Offset of the first element inside its block.
    pub start_offset: usize,
}

impl Deque {
    /// Creates an empty deque. Does not allocate.
    pub const fn new() -> Self {
        Self {
            blocks: Directory::new(),
            len: 0,
            start_offset: 0,
        }
    }

    /// Creates a deque holding `len` zeros.
    ///
    /// The directory is sized to twice the number of blocks needed, so the
    /// first pushes at either end do not have to grow it.
    pub fn with_len(len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        let needed = len.div_ceil(BLOCK_SIZE);
        let mut blocks = Directory::with_capacity((needed * 2).max(1));
        for _ in 0..needed {
            blocks.push_back_block(new_block());
        }
        let deque = Self {
            blocks,
            len,
            start_offset: 0,
        };
        deque.debug_check();
        deque
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of block slots the directory can address without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.blocks.capacity()
    }

    /// Number of blocks currently allocated.
    #[inline]
    pub fn allocated_blocks(&self) -> usize {
        self.blocks.live()
    }

    /// Returns a snapshot of the addressing state.
    pub fn layout(&self) -> DequeLayout {
        DequeLayout {
            len: self.len,
            capacity: self.blocks.capacity(),
            allocated_blocks: self.blocks.live(),
            start_block: self.blocks.start(),
            start_offset: self.start_offset,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`DequeError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&Value> {
        let pos = locate(self.start_offset, self.len, index)?;
        Ok(&self.blocks.block(pos.block)[pos.offset])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`DequeError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let pos = locate(self.start_offset, self.len, index)?;
        Ok(&mut self.blocks.block_mut(pos.block)[pos.offset])
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&Value> {
        self.get(0).ok()
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&Value> {
        self.len.checked_sub(1).and_then(|last| self.get(last).ok())
    }

    /// Appends `value` to the back.
    pub fn push_back(&mut self, value: Value) {
        let pos = Position::at(self.start_offset + self.len);
        debug_assert!(pos.block <= self.blocks.live());
        let block = if pos.block < self.blocks.live() {
            self.blocks.block_mut(pos.block)
        } else {
            self.blocks.ensure_capacity(self.blocks.live() + 1);
            self.blocks.push_back_block(new_block())
        };
        block[pos.offset] = value;
        self.len += 1;
        self.debug_check();
    }

    /// Prepends `value` to the front.
    pub fn push_front(&mut self, value: Value) {
        if self.len == 0 {
            // Same layout as a first push at the back: block at the start
            // slot, element at offset 0.
            self.push_back(value);
            return;
        }

        if self.start_offset > 0 {
            self.start_offset -= 1;
            self.blocks.block_mut(0)[self.start_offset] = value;
        } else {
            // Grow before picking the preceding slot: growth moves the start
            // to slot 0, so the new block lands in the last slot.
            if self.blocks.live() >= self.blocks.capacity() {
                self.blocks.ensure_capacity(self.blocks.live() + 1);
            }
            self.blocks.push_front_block(new_block())[BLOCK_SIZE - 1] = value;
            self.start_offset = BLOCK_SIZE - 1;
        }
        self.len += 1;
        self.debug_check();
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`DequeError::Empty`] if the deque holds no elements.
    pub fn pop_back(&mut self) -> Result<Value> {
        if self.len == 0 {
            return Err(DequeError::Empty);
        }
        let pos = Position::at(self.start_offset + self.len - 1);
        let value = self.blocks.block(pos.block)[pos.offset];

        if self.len == 1 {
            self.reset();
            return Ok(value);
        }

        self.len -= 1;
        if pos.offset == 0 {
            self.blocks.release_back_block();
        }
        self.debug_check();
        Ok(value)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// [`DequeError::Empty`] if the deque holds no elements.
    pub fn pop_front(&mut self) -> Result<Value> {
        if self.len == 0 {
            return Err(DequeError::Empty);
        }
        let value = self.blocks.block(0)[self.start_offset];

        if self.len == 1 {
            self.reset();
            return Ok(value);
        }

        self.len -= 1;
        self.start_offset += 1;
        if self.start_offset == BLOCK_SIZE {
            self.blocks.release_front_block();
            self.start_offset = 0;
        }
        self.debug_check();
        Ok(value)
    }

    /// Removes every element and frees every block.
    ///
    /// The directory's slot array is kept for reuse; see
    /// [`Deque::shrink_to_fit`] to release it.
    pub fn clear(&mut self) {
        trace_event!(len = self.len, blocks = self.blocks.live(), "deque cleared");
        self.reset();
    }

    /// Shrinks the directory to the number of live blocks.
    pub fn shrink_to_fit(&mut self) {
        self.blocks.shrink_to_fit();
        self.debug_check();
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: Value) {
        for slot in self.iter_mut() {
            *slot = value;
        }
    }

    /// Exchanges the contents of two deques without copying or allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty with no directory.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Releases everything `self` owns, then takes over `source`'s storage.
    ///
    /// `source` is left empty with no directory.
    pub fn assign_from(&mut self, source: &mut Self) {
        drop(self.take());
        self.swap(source);
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns a front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self.blocks.ring_mut(), self.start_offset, self.len)
    }

    /// Checks the internal addressing invariants.
    ///
    /// Always `true` for a deque driven through its public API. Scans every
    /// directory slot.
    pub fn is_consistent(&self) -> bool {
        self.blocks.is_consistent() && self.counters_consistent()
    }

    /// Block count matches the element range, and an empty deque is reset.
    fn counters_consistent(&self) -> bool {
        if self.len == 0 {
            return self.blocks.live() == 0 && self.start_offset == 0;
        }
        self.start_offset < BLOCK_SIZE
            && Position::at(self.start_offset + self.len - 1).block + 1 == self.blocks.live()
    }

    fn reset(&mut self) {
        self.blocks.clear();
        self.len = 0;
        self.start_offset = 0;
    }

    /// Constant-time invariant check run after every mutation in debug
    /// builds. Only the slots at and around the ends of the live range are
    /// inspected; [`Deque::is_consistent`] does the full scan.
    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(
            self.blocks.edges_consistent() && self.counters_consistent(),
            "deque invariants violated: {:?}",
            self.layout()
        );
    }
}

impl Clone for Deque {
    /// Deep copy. Every live block is copied whole into a fresh directory
    /// whose first block sits in slot 0.
    fn clone(&self) -> Self {
        if self.len == 0 {
            return Self::new();
        }
        let mut blocks = Directory::with_capacity((self.blocks.live() * 2).max(1));
        for block in self.blocks.live_blocks() {
            blocks.push_back_block(copy_block(block));
        }
        let copy = Self {
            blocks,
            len: self.len,
            start_offset: self.start_offset,
        };
        copy.debug_check();
        copy
    }

    /// Copy-and-swap: the old contents are dropped with the temporary.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl Index<usize> for Deque {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<usize> for Deque {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Debug for Deque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Deque {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Deque {}

impl Extend<Value> for Deque {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a> Extend<&'a Value> for Deque {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<Value> for Deque {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl From<&[Value]> for Deque {
    /// Builds a pre-sized deque and writes `values` in order.
    fn from(values: &[Value]) -> Self {
        let mut deque = Self::with_len(values.len());
        for (slot, &value) in deque.iter_mut().zip(values) {
            *slot = value;
        }
        deque
    }
}

impl<const N: usize> From<[Value; N]> for Deque {
    fn from(values: [Value; N]) -> Self {
        Self::from(&values[..])
    }
}

impl From<Deque> for Vec<Value> {
    fn from(deque: Deque) -> Self {
        deque.into_iter().collect()
    }
}
