//! Iterators over a [`Deque`].

use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use super::directory::RingMut;
use super::Deque;
use crate::alloc::{Value, BLOCK_SIZE};

/// Borrowing front-to-back iterator, created by [`Deque::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    deque: &'a Deque,
    range: Range<usize>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(deque: &'a Deque) -> Self {
        Self {
            deque,
            range: 0..deque.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        self.deque.get(i).ok()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let i = self.range.nth(n)?;
        self.deque.get(i).ok()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        self.deque.get(i).ok()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Mutable front-to-back iterator, created by [`Deque::iter_mut`].
///
/// Walks the directory ring; the first and last live blocks are trimmed to
/// the element range up front, so both ends stay O(1) per step.
pub struct IterMut<'a> {
    slots: RingMut<'a>,
    front: slice::IterMut<'a, Value>,
    back: slice::IterMut<'a, Value>,
    remaining: usize,
}

impl<'a> IterMut<'a> {
    pub(super) fn new(mut slots: RingMut<'a>, start_offset: usize, len: usize) -> Self {
        let mut front = slice::IterMut::default();
        let mut back = slice::IterMut::default();
        if len > 0 {
            let end = start_offset + len;
            if let Some(first) = slots.by_ref().find_map(|slot| slot.as_deref_mut()) {
                if end <= BLOCK_SIZE {
                    front = first[start_offset..end].iter_mut();
                } else {
                    front = first[start_offset..].iter_mut();
                    if let Some(last) = slots.by_ref().rev().find_map(|slot| slot.as_deref_mut()) {
                        back = last[..(end - 1) % BLOCK_SIZE + 1].iter_mut();
                    }
                }
            }
        }
        Self {
            slots,
            front,
            back,
            remaining: len,
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.front.next() {
                self.remaining -= 1;
                return Some(value);
            }
            match self.slots.next() {
                Some(slot) => {
                    if let Some(block) = slot.as_deref_mut() {
                        self.front = block.iter_mut();
                    }
                }
                None => {
                    let value = self.back.next()?;
                    self.remaining -= 1;
                    return Some(value);
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.back.next_back() {
                self.remaining -= 1;
                return Some(value);
            }
            match self.slots.next_back() {
                Some(slot) => {
                    if let Some(block) = slot.as_deref_mut() {
                        self.back = block.iter_mut();
                    }
                }
                None => {
                    let value = self.front.next_back()?;
                    self.remaining -= 1;
                    return Some(value);
                }
            }
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}

/// Owning iterator, created by [`Deque::into_iter`].
///
/// Blocks are released as soon as they are drained.
pub struct IntoIter {
    deque: Deque,
}

impl Iterator for IntoIter {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        self.deque.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Value> {
        self.deque.pop_back().ok()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for Deque {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a> IntoIterator for &'a mut Deque {
    type Item = &'a mut Value;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Deque {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
