//! Logical index translation.
//!
//! Element `i` of a deque lives at absolute position `start_offset + i`,
//! counted from the first slot of the first live block. The absolute
//! position splits into a block (relative to the directory's start) and an
//! in-block offset; the directory then maps the block onto a slot.

use crate::alloc::block::split;
use crate::error::{DequeError, Result};

/// Where an element lives, relative to the first live block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    /// Block index relative to the directory start.
    pub(crate) block: usize,
    /// Offset inside that block.
    pub(crate) offset: usize,
}

impl Position {
    /// Position of absolute slot `abs`.
    #[inline(always)]
    pub(crate) const fn at(abs: usize) -> Self {
        let (block, offset) = split(abs);
        Self { block, offset }
    }
}

/// Translates logical `index` of a deque holding `len` elements whose first
/// element sits at `start_offset`.
#[inline]
pub(crate) fn locate(start_offset: usize, len: usize, index: usize) -> Result<Position> {
    if index >= len {
        return Err(DequeError::IndexOutOfRange { index, len });
    }
    Ok(Position::at(start_offset + index))
}
