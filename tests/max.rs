//! Max: correctness, tie-break, empty input

use std::hint::black_box;

use proptest::prelude::*;
use pullstack::{from_fn, from_slice, ints, max, max_by, SeqExt, SequenceError, Stack};
use test_case::test_case;

#[test_case(3, Ok(2) ; "three increasing ints")]
#[test_case(1, Ok(0) ; "single element")]
#[test_case(0, Err(SequenceError::Empty) ; "empty range")]
fn max_of_range(n: usize, expected: Result<usize, SequenceError>) {
    assert_eq!(max(ints(n)), expected);
}

#[test]
fn max_of_stack_traversal() {
    let stack: Stack<i32> = [10, 30, 20].into_iter().collect();
    assert_eq!(max(stack.seq()), Ok(&30));
    // The stack is only borrowed.
    assert_eq!(stack.len(), 3);
}

#[test]
fn max_of_empty_stack() {
    let stack: Stack<i32> = Stack::new();
    assert_eq!(max(stack.seq()), Err(SequenceError::Empty));
}

#[test]
fn max_keeps_earliest_of_equal_elements() {
    #[derive(Debug)]
    struct Tagged {
        key: u8,
        tag: &'static str,
    }

    let items = [
        Tagged { key: 1, tag: "a" },
        Tagged { key: 5, tag: "first" },
        Tagged { key: 5, tag: "second" },
        Tagged { key: 2, tag: "b" },
    ];

    let best = max_by(from_slice(&items), |x, y| x.key.cmp(&y.key)).map(|t| t.tag);
    assert_eq!(best, Ok("first"));
}

#[test]
fn max_works_on_filtered_sequence() {
    let odd_below_ten = ints(10).filter(|n| n % 2 == 1);
    assert_eq!(max(&odd_below_ten), Ok(9));

    let none = ints(10).filter(|n| *n > 100);
    assert_eq!(max(none), Err(SequenceError::Empty));
}

#[test]
fn max_drives_closure_producer() {
    let descending = from_fn(|yield_: &mut dyn FnMut(i32) -> bool| {
        for v in (-5..=5).rev() {
            if !yield_(v) {
                return;
            }
        }
    });
    assert_eq!(max(&descending), Ok(5));
    assert_eq!(max(descending.filter(|v| *v < 0)), Ok(-1));
}

/// Emits `depth..limit` (largest in the middle), one recursion level per element.
fn tent(depth: i64, limit: i64, yield_: &mut dyn FnMut(i64) -> bool) -> bool {
    if depth == limit {
        return true;
    }
    let frame = black_box([depth; 8]);
    if !yield_(limit / 2 - (frame[0] - limit / 2).abs()) {
        return false;
    }
    tent(depth + 1, limit, yield_)
}

#[test]
fn max_over_deep_recursive_producer() {
    let seq = from_fn(|yield_: &mut dyn FnMut(i64) -> bool| {
        tent(0, 1_000, yield_);
    });
    assert_eq!(max(&seq), Ok(500));
}

#[test]
fn max_over_producer_with_large_local_buffer() {
    let seq = from_fn(|yield_: &mut dyn FnMut(u8) -> bool| {
        let mut buffer = black_box([0u8; 48 * 1024]);
        buffer[1234] = 99;
        for byte in buffer.iter().skip(1230).take(8) {
            if !yield_(*byte) {
                return;
            }
        }
    });
    assert_eq!(max(&seq), Ok(99));
}

proptest! {
    #[test]
    fn max_agrees_with_iterator_max(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let got = max(from_slice(&values).copied());
        match values.iter().copied().max() {
            Some(expected) => prop_assert_eq!(got, Ok(expected)),
            None => prop_assert_eq!(got, Err(SequenceError::Empty)),
        }
    }

    #[test]
    fn max_is_an_upper_bound(values in proptest::collection::vec(any::<u8>(), 1..64)) {
        let stack: Stack<u8> = values.iter().copied().collect();
        let best = *max(stack.seq()).expect("non-empty input");
        prop_assert!(values.iter().all(|v| *v <= best));
        prop_assert!(values.contains(&best));
    }
}
