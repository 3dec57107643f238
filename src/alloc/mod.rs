//! Storage primitives backing the deque.
//!
//! - `block`: fixed-size element blocks and position splitting

pub mod block;

pub use block::{Block, Value, BLOCK_SIZE};
