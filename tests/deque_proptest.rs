use blockdeque::{Deque, DequeError, Value, BLOCK_SIZE};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(Value),
    PushFront(Value),
    PopBack,
    PopFront,
    Get(usize),
    Set(usize, Value),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        8 => any::<Value>().prop_map(Operation::PushBack),
        8 => any::<Value>().prop_map(Operation::PushFront),
        3 => Just(Operation::PopBack),
        3 => Just(Operation::PopFront),
        2 => any::<usize>().prop_map(Operation::Get),
        2 => (any::<usize>(), any::<Value>()).prop_map(|(i, v)| Operation::Set(i, v)),
        1 => Just(Operation::Clear),
    ]
}

/// Runs of same-side pushes and pops long enough to cross block boundaries.
fn burst() -> impl Strategy<Value = (bool, bool, usize)> {
    (any::<bool>(), any::<bool>(), 1..(3 * BLOCK_SIZE))
}

fn assert_matches(deque: &Deque, model: &VecDeque<Value>) {
    assert_eq!(deque.len(), model.len(), "Length mismatch");
    assert!(deque.is_consistent(), "Inconsistent layout {:?}", deque.layout());
    assert!(deque.iter().eq(model.iter()), "Content mismatch");
}

proptest! {
    #[test]
    fn test_deque_matches_std_vec_deque(ops in proptest::collection::vec(operation(), 1..600)) {
        let mut deque = Deque::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Operation::PushBack(v) => {
                    deque.push_back(v);
                    model.push_back(v);
                }
                Operation::PushFront(v) => {
                    deque.push_front(v);
                    model.push_front(v);
                }
                Operation::PopBack => {
                    assert_eq!(deque.pop_back().ok(), model.pop_back(), "PopBack mismatch");
                }
                Operation::PopFront => {
                    assert_eq!(deque.pop_front().ok(), model.pop_front(), "PopFront mismatch");
                }
                Operation::Get(i) => {
                    let i = if model.is_empty() { i } else { i % (model.len() + 1) };
                    match model.get(i) {
                        Some(v) => assert_eq!(deque.get(i), Ok(v)),
                        None => assert_eq!(
                            deque.get(i),
                            Err(DequeError::IndexOutOfRange { index: i, len: model.len() })
                        ),
                    }
                }
                Operation::Set(i, v) => {
                    let i = i % (model.len() + 1);
                    if let Some(slot) = model.get_mut(i) {
                        *slot = v;
                        *deque.get_mut(i).unwrap() = v;
                    } else {
                        prop_assert!(deque.get_mut(i).is_err());
                    }
                }
                Operation::Clear => {
                    deque.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(deque.len(), model.len());
        }

        assert_matches(&deque, &model);
    }

    #[test]
    fn test_bursts_cross_block_and_directory_boundaries(
        bursts in proptest::collection::vec(burst(), 1..12)
    ) {
        let mut deque = Deque::new();
        let mut model = VecDeque::new();
        let mut next: Value = 0;

        for (front, push, count) in bursts {
            for _ in 0..count {
                match (front, push) {
                    (true, true) => {
                        deque.push_front(next);
                        model.push_front(next);
                        next = next.wrapping_add(1);
                    }
                    (false, true) => {
                        deque.push_back(next);
                        model.push_back(next);
                        next = next.wrapping_add(1);
                    }
                    (true, false) => {
                        prop_assert_eq!(deque.pop_front().ok(), model.pop_front());
                    }
                    (false, false) => {
                        prop_assert_eq!(deque.pop_back().ok(), model.pop_back());
                    }
                }
            }
            assert_matches(&deque, &model);

            let expected_blocks = if model.is_empty() {
                0
            } else {
                (deque.layout().start_offset + model.len() - 1) / BLOCK_SIZE + 1
            };
            prop_assert_eq!(deque.allocated_blocks(), expected_blocks);
            prop_assert!(deque.allocated_blocks() <= deque.capacity());
        }
    }

    #[test]
    fn test_clone_is_deep(
        ops in proptest::collection::vec(operation(), 1..400),
        extra in proptest::collection::vec(any::<Value>(), 1..300),
    ) {
        let mut original = Deque::new();
        for op in ops {
            match op {
                Operation::PushBack(v) => original.push_back(v),
                Operation::PushFront(v) => original.push_front(v),
                Operation::PopBack => { let _ = original.pop_back(); }
                Operation::PopFront => { let _ = original.pop_front(); }
                _ => {}
            }
        }
        let snapshot: Vec<Value> = original.iter().copied().collect();

        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.layout().start_block, 0);

        for (i, v) in extra.iter().enumerate() {
            if i % 2 == 0 {
                copy.push_front(*v);
            } else {
                copy.push_back(*v);
            }
        }
        copy.fill(-7);
        let _ = copy.pop_front();

        prop_assert!(original.iter().copied().eq(snapshot.iter().copied()));
        prop_assert!(original.is_consistent());
    }

    #[test]
    fn test_swap_and_take_preserve_contents(
        a in proptest::collection::vec(any::<Value>(), 0..500),
        b in proptest::collection::vec(any::<Value>(), 0..500),
    ) {
        let mut left: Deque = a.iter().copied().collect();
        let mut right = Deque::from(b.as_slice());

        left.swap(&mut right);
        prop_assert!(left.iter().eq(b.iter()));
        prop_assert!(right.iter().eq(a.iter()));

        let taken = left.take();
        prop_assert!(taken.iter().eq(b.iter()));
        prop_assert!(left.is_empty());
        prop_assert_eq!(left.capacity(), 0);
    }
}
