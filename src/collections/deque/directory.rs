//! `Directory` — the ring of block handles behind a [`Deque`](super::Deque).
//!
//! The directory owns a slot array whose length is its capacity. The live
//! blocks occupy `live` consecutive slots starting at `start`, wrapping
//! modulo the capacity; every other slot is `None`.
//!
//! Growth doubles the slot array and re-lays the live blocks out from slot 0,
//! moving the handles without touching block contents.

use core::iter::Chain;
use core::slice;

use crate::alloc::{Block, Value, BLOCK_SIZE};
use crate::trace::trace_event;

/// Mutable walk over every slot of a [`Directory`] in ring order.
pub(crate) type RingMut<'a> =
    Chain<slice::IterMut<'a, Option<Block>>, slice::IterMut<'a, Option<Block>>>;

/// Ring of optional block handles.
#[derive(Default)]
pub(crate) struct Directory {
    slots: Vec<Option<Block>>,
    start: usize,
    live: usize,
}

impl Directory {
    /// Creates a directory with no slots.
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            start: 0,
            live: 0,
        }
    }

    /// Creates a directory with `capacity` empty slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            start: 0,
            live: 0,
        }
    }

    /// Number of slots.
    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a block.
    #[inline(always)]
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Slot holding the first live block.
    #[inline(always)]
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    /// Maps a block index relative to `start` onto a slot.
    #[inline(always)]
    pub(crate) fn physical(&self, rel: usize) -> usize {
        debug_assert!(self.capacity() != 0, "physical() on a directory with no slots");
        (self.start + rel) % self.capacity()
    }

    /// Returns the live block `rel` positions after `start`.
    ///
    /// # Panics
    /// Panics if `rel >= live`; callers translate only indices below `len`,
    /// which always land in live blocks.
    #[inline]
    pub(crate) fn block(&self, rel: usize) -> &[Value; BLOCK_SIZE] {
        assert!(rel < self.live, "block {rel} outside the {} live blocks", self.live);
        match self.slots[self.physical(rel)].as_deref() {
            Some(block) => block,
            None => unreachable!("live slot without a block"),
        }
    }

    /// Mutable counterpart of [`Directory::block`].
    #[inline]
    pub(crate) fn block_mut(&mut self, rel: usize) -> &mut [Value; BLOCK_SIZE] {
        assert!(rel < self.live, "block {rel} outside the {} live blocks", self.live);
        let slot = self.physical(rel);
        match self.slots[slot].as_deref_mut() {
            Some(block) => block,
            None => unreachable!("live slot without a block"),
        }
    }

    /// Guarantees room for at least `min_blocks` live blocks.
    ///
    /// Capacity doubles (starting from 1) until it reaches `min_blocks`.
    /// On growth the live blocks are moved to slots `0..live` and `start`
    /// becomes 0.
    pub(crate) fn ensure_capacity(&mut self, min_blocks: usize) {
        if self.capacity() >= min_blocks {
            return;
        }
        let mut new_capacity = self.capacity().max(1);
        while new_capacity < min_blocks {
            new_capacity = new_capacity.saturating_mul(2);
        }
        self.relocate(new_capacity);
    }

    /// Shrinks the slot array to exactly the live block count.
    pub(crate) fn shrink_to_fit(&mut self) {
        if self.capacity() != self.live {
            self.relocate(self.live);
        }
    }

    /// Moves the live blocks into a fresh slot array of `new_capacity`.
    ///
    /// The new array is fully built before it replaces the old one.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.live);
        let mut slots: Vec<Option<Block>> = Vec::with_capacity(new_capacity);
        for rel in 0..self.live {
            let slot = self.physical(rel);
            slots.push(self.slots[slot].take());
        }
        slots.resize_with(new_capacity, || None);

        trace_event!(
            old_capacity = self.capacity(),
            new_capacity,
            live = self.live,
            "directory relocated"
        );

        self.slots = slots;
        self.start = 0;
    }

    /// Installs `block` right after the last live block.
    ///
    /// The caller must have ensured `live < capacity`.
    pub(crate) fn push_back_block(&mut self, block: Block) -> &mut [Value; BLOCK_SIZE] {
        debug_assert!(self.live < self.capacity(), "no free slot behind the live range");
        let slot = self.physical(self.live);
        debug_assert!(self.slots[slot].is_none());
        self.live += 1;
        trace_event!(slot, live = self.live, "block allocated at back");
        self.slots[slot].insert(block)
    }

    /// Installs `block` right before the first live block and makes it the
    /// new start.
    ///
    /// The caller must have ensured `live < capacity`.
    pub(crate) fn push_front_block(&mut self, block: Block) -> &mut [Value; BLOCK_SIZE] {
        debug_assert!(self.live < self.capacity(), "no free slot before the live range");
        let slot = self.physical(self.capacity() - 1);
        debug_assert!(self.slots[slot].is_none());
        self.start = slot;
        self.live += 1;
        trace_event!(slot, live = self.live, "block allocated at front");
        self.slots[slot].insert(block)
    }

    /// Frees the last live block.
    pub(crate) fn release_back_block(&mut self) {
        debug_assert!(self.live > 0, "release_back_block() with no live blocks");
        let slot = self.physical(self.live - 1);
        self.slots[slot] = None;
        self.live -= 1;
        if self.live == 0 {
            self.start = 0;
        }
        trace_event!(slot, live = self.live, "block released at back");
    }

    /// Frees the first live block and advances `start`.
    pub(crate) fn release_front_block(&mut self) {
        debug_assert!(self.live > 0, "release_front_block() with no live blocks");
        let slot = self.start;
        self.slots[slot] = None;
        self.live -= 1;
        self.start = if self.live == 0 { 0 } else { self.physical(1) };
        trace_event!(slot, live = self.live, "block released at front");
    }

    /// Frees every live block, keeping the slot array.
    pub(crate) fn clear(&mut self) {
        for rel in 0..self.live {
            let slot = self.physical(rel);
            self.slots[slot] = None;
        }
        self.start = 0;
        self.live = 0;
    }

    /// Live blocks in logical order.
    pub(crate) fn live_blocks(&self) -> impl Iterator<Item = &[Value; BLOCK_SIZE]> + '_ {
        let (wrapped, head) = self.slots.split_at(self.start);
        head.iter()
            .chain(wrapped)
            .take(self.live)
            .filter_map(|slot| slot.as_deref())
    }

    /// Every slot in ring order, starting at `start`.
    ///
    /// The first `live` slots hold blocks and the rest are empty, so
    /// skipping empty slots from either end yields the live blocks in order.
    pub(crate) fn ring_mut(&mut self) -> RingMut<'_> {
        let (wrapped, head) = self.slots.split_at_mut(self.start);
        head.iter_mut().chain(wrapped.iter_mut())
    }

    /// Checks that exactly the slots of the live range hold blocks.
    pub(crate) fn is_consistent(&self) -> bool {
        let capacity = self.capacity();
        if self.live > capacity {
            return false;
        }
        if capacity == 0 {
            return self.start == 0;
        }
        if self.start >= capacity {
            return false;
        }
        self.slots.iter().enumerate().all(|(slot, block)| {
            let rel = (slot + capacity - self.start) % capacity;
            block.is_some() == (rel < self.live)
        })
    }

    /// Constant-time subset of [`Directory::is_consistent`]: checks the
    /// counters, the first and last live slots, and the empty slots bordering
    /// the live range.
    pub(crate) fn edges_consistent(&self) -> bool {
        let capacity = self.capacity();
        if self.live > capacity {
            return false;
        }
        if capacity == 0 {
            return self.start == 0;
        }
        if self.start >= capacity {
            return false;
        }
        let occupied = |rel: usize| self.slots[self.physical(rel)].is_some();
        if self.live == 0 {
            return !occupied(0);
        }
        occupied(0)
            && occupied(self.live - 1)
            && (self.live == capacity || (!occupied(self.live) && !occupied(capacity - 1)))
    }
}
