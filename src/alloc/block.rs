//! Fixed-size element blocks.
//!
//! A block is the unit of allocation for [`Deque`](crate::Deque): it is
//! allocated when the first element lands in it and freed when its last
//! element leaves. Blocks are always fully initialized (zero-filled on
//! allocation), so a whole block can be copied without tracking which
//! slots are live.

/// The element type stored by the deque.
pub type Value = i32;

/// Number of elements per block (128 × 4 bytes = 512 bytes).
pub const BLOCK_SIZE: usize = 128;

/// An owning handle to one block of storage.
pub type Block = Box<[Value; BLOCK_SIZE]>;

/// Allocates a zero-filled block.
#[inline]
pub fn new_block() -> Block {
    Box::new([0; BLOCK_SIZE])
}

/// Allocates a new block holding a copy of every slot of `src`.
#[inline]
pub fn copy_block(src: &[Value; BLOCK_SIZE]) -> Block {
    Box::new(*src)
}

/// Splits an absolute position into `(block, offset)`.
///
/// `block` is relative to the first live block, not a directory slot.
#[inline(always)]
pub const fn split(abs: usize) -> (usize, usize) {
    if BLOCK_SIZE.is_power_of_two() {
        let shift = BLOCK_SIZE.trailing_zeros();
        let mask = BLOCK_SIZE - 1;
        (abs >> shift, abs & mask)
    } else {
        (abs / BLOCK_SIZE, abs % BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_zeroed() {
        let block = new_block();
        assert!(block.iter().all(|&v| v == 0));
    }

    #[test]
    fn copy_block_is_independent() {
        let mut a = new_block();
        a[7] = 42;
        let mut b = copy_block(&a);
        assert_eq!(b[7], 42);
        b[7] = 1;
        assert_eq!(a[7], 42);
    }

    #[test]
    fn split_matches_div_mod() {
        for abs in [0, 1, 127, 128, 129, 255, 256, 1000] {
            assert_eq!(split(abs), (abs / BLOCK_SIZE, abs % BLOCK_SIZE));
        }
    }
}
