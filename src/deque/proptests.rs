//! Property-based tests for the linked deque using proptest
//!
//! Random operation sequences are applied both to a [`Deque`] and to a
//! `VecDeque` model with the same eviction policy; the two must agree after
//! every step and the deque's link structure must stay intact.

use super::*;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    AppendLeft(i32),
    Pop,
    PopLeft,
    Peek(usize),
    Rotate(isize),
    Count(i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Append),
        4 => any::<i32>().prop_map(Op::AppendLeft),
        2 => Just(Op::Pop),
        2 => Just(Op::PopLeft),
        2 => (0usize..40).prop_map(Op::Peek),
        2 => (-50isize..50).prop_map(Op::Rotate),
        1 => (-3i32..3).prop_map(Op::Count),
        1 => Just(Op::Clear),
    ]
}

fn capacity_strategy() -> impl Strategy<Value = Capacity> {
    prop_oneof![
        Just(Capacity::Unbounded),
        (0usize..12).prop_map(Capacity::Bounded),
    ]
}

/// Reference model with the same eviction policy
struct Model {
    items: VecDeque<i32>,
    capacity: Capacity,
}

impl Model {
    fn append(&mut self, value: i32) -> Option<i32> {
        self.items.push_back(value);
        if self.capacity.is_exceeded_by(self.items.len()) {
            self.items.pop_front()
        } else {
            None
        }
    }

    fn append_left(&mut self, value: i32) -> Option<i32> {
        self.items.push_front(value);
        if self.capacity.is_exceeded_by(self.items.len()) {
            self.items.pop_back()
        } else {
            None
        }
    }

    fn rotate(&mut self, n: isize) {
        let len = self.items.len();
        if len < 2 {
            return;
        }
        let steps = n.unsigned_abs() % len;
        if n >= 0 {
            self.items.rotate_right(steps);
        } else {
            self.items.rotate_left(steps);
        }
    }
}

mod model_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_matches_model(
            capacity in capacity_strategy(),
            ops in prop::collection::vec(op_strategy(), 1..120)
        ) {
            let deque = Deque::new(capacity);
            let mut model = Model { items: VecDeque::new(), capacity };

            for op in ops {
                match op {
                    Op::Append(v) => prop_assert_eq!(deque.append(v), model.append(v)),
                    Op::AppendLeft(v) => prop_assert_eq!(deque.append_left(v), model.append_left(v)),
                    Op::Pop => prop_assert_eq!(deque.try_pop().ok(), model.items.pop_back()),
                    Op::PopLeft => prop_assert_eq!(deque.try_pop_left().ok(), model.items.pop_front()),
                    Op::Peek(i) => prop_assert_eq!(deque.try_peek(i).ok(), model.items.get(i).copied()),
                    Op::Rotate(n) => {
                        deque.rotate(n);
                        model.rotate(n);
                    }
                    Op::Count(v) => prop_assert_eq!(
                        deque.count(&v),
                        model.items.iter().filter(|item| **item == v).count()
                    ),
                    Op::Clear => {
                        deque.clear();
                        model.items.clear();
                    }
                }

                prop_assert_eq!(deque.len(), model.items.len());
                deque.assert_invariants();
            }

            let values: Vec<i32> = deque.values().collect();
            let expected: Vec<i32> = model.items.iter().copied().collect();
            prop_assert_eq!(values, expected);
        }
    }
}

mod capacity_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_len_is_min_of_appends_and_capacity(
            capacity in capacity_strategy(),
            count in 0usize..200
        ) {
            let deque = Deque::new(capacity);
            for i in 0..count {
                deque.append(i);
            }

            let expected = match capacity {
                Capacity::Bounded(limit) => count.min(limit),
                Capacity::Unbounded => count,
            };
            prop_assert_eq!(deque.len(), expected);

            match capacity {
                Capacity::Bounded(limit) => prop_assert_eq!(deque.is_full(), deque.len() == limit),
                Capacity::Unbounded => prop_assert!(!deque.is_full()),
            }
        }

        #[test]
        fn test_full_deque_evicts_exactly_one_per_insert(
            limit in 1usize..16,
            extra in prop::collection::vec(any::<bool>(), 1..40)
        ) {
            let deque = Deque::from_iter_with_capacity(0..limit as i64, Capacity::Bounded(limit));
            let mut next = limit as i64;

            for to_right in extra {
                let (left, right) = (deque.peek(0), deque.peek(limit - 1));
                if to_right {
                    prop_assert_eq!(deque.append(next), Some(left));
                    prop_assert_eq!(deque.peek(limit - 1), next);
                } else {
                    prop_assert_eq!(deque.append_left(next), Some(right));
                    prop_assert_eq!(deque.peek(0), next);
                }
                prop_assert_eq!(deque.len(), limit);
                next += 1;
            }
        }

        #[test]
        fn test_from_iter_keeps_the_tail_of_the_sequence(
            capacity in capacity_strategy(),
            input in prop::collection::vec(any::<u16>(), 0..50)
        ) {
            let deque = Deque::from_iter_with_capacity(input.clone(), capacity);
            let keep = match capacity {
                Capacity::Bounded(limit) => input.len().min(limit),
                Capacity::Unbounded => input.len(),
            };
            let values: Vec<u16> = deque.values().collect();
            prop_assert_eq!(&values[..], &input[input.len() - keep..]);
        }
    }
}

mod structural_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_rotate_then_inverse_restores_order(
            input in prop::collection::vec(any::<i32>(), 2..30),
            n in -100isize..100
        ) {
            let deque: Deque<i32> = input.iter().copied().collect();
            deque.rotate(n);
            deque.rotate(-n);
            prop_assert_eq!(deque.values().collect::<Vec<_>>(), input);
        }

        #[test]
        fn test_rotate_is_modular(
            input in prop::collection::vec(any::<i32>(), 1..20),
            n in -60isize..60
        ) {
            let len = input.len() as isize;
            let direct: Deque<i32> = input.iter().copied().collect();
            let reduced: Deque<i32> = input.iter().copied().collect();

            direct.rotate(n);
            reduced.rotate(n.rem_euclid(len));
            prop_assert_eq!(
                direct.values().collect::<Vec<_>>(),
                reduced.values().collect::<Vec<_>>()
            );
        }

        #[test]
        fn test_peek_is_stable(
            input in prop::collection::vec(any::<i32>(), 1..40),
            index in 0usize..40
        ) {
            let deque: Deque<i32> = input.iter().copied().collect();
            let first = deque.try_peek(index);
            let second = deque.try_peek(index);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.is_err(), index >= input.len());
            if let Ok(value) = first {
                prop_assert_eq!(value, input[index]);
            }
        }

        #[test]
        fn test_copy_is_equal_and_independent(
            capacity in capacity_strategy(),
            input in prop::collection::vec(any::<i32>(), 0..30),
            pushed in any::<i32>()
        ) {
            let source = Deque::from_iter_with_capacity(input, capacity);
            let before: Vec<i32> = source.values().collect();

            let copy = source.copy();
            prop_assert_eq!(copy.capacity(), source.capacity());
            prop_assert_eq!(copy.values().collect::<Vec<_>>(), before.clone());

            copy.append(pushed);
            copy.rotate(1);
            let _ = copy.try_pop_left();
            prop_assert_eq!(source.values().collect::<Vec<_>>(), before);
            copy.assert_invariants();
        }
    }
}
