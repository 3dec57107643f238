//! `proptest` strategies for deques, enabled by the `proptest` feature.
//!
//! Deques built by operation sequences reach layouts that collecting an
//! iterator never does: a start block in the middle of the directory, a
//! non-zero start offset, a wrapped live range.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::{Deque, DequeError, Result, Value};

/// One mutation of a deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `push_back(value)`
    PushBack(Value),
    /// `push_front(value)`
    PushFront(Value),
    /// `pop_back()`
    PopBack,
    /// `pop_front()`
    PopFront,
}

impl Op {
    /// Applies the operation. Pops on an empty deque are no-ops.
    ///
    /// # Panics
    /// Panics if a pop fails with anything other than [`DequeError::Empty`].
    pub fn apply(self, deque: &mut Deque) {
        match self {
            Op::PushBack(v) => deque.push_back(v),
            Op::PushFront(v) => deque.push_front(v),
            Op::PopBack => expect_popped(deque.pop_back()),
            Op::PopFront => expect_popped(deque.pop_front()),
        }
    }
}

fn expect_popped(result: Result<Value>) {
    match result {
        Ok(_) | Err(DequeError::Empty) => {}
        Err(err) => panic!("pop failed: {err}"),
    }
}

/// A single operation, weighted towards pushes so sequences grow.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<Value>().prop_map(Op::PushBack),
        3 => any::<Value>().prop_map(Op::PushFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::PopFront),
    ]
}

/// Sequences of up to `max_ops` operations.
pub fn ops(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    vec(op(), 0..=max_ops)
}

/// Deques built by replaying up to `max_ops` operations on an empty deque.
pub fn deque(max_ops: usize) -> impl Strategy<Value = Deque> {
    ops(max_ops).prop_map(|ops| {
        let mut deque = Deque::new();
        for op in ops {
            op.apply(&mut deque);
        }
        deque
    })
}
