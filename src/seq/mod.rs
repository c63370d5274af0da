//! Push-style sequence protocol
//!
//! A sequence is anything that can be asked to emit its elements, in order,
//! to a consumer callback. The consumer returns `true` to keep going and
//! `false` to stop; a producer must return as soon as it sees `false`.
//!
//! Nothing here stores an iteration position. Position lives on the call
//! stack of `produce` (direct mode) or inside a suspended [`Pull`](crate::Pull)
//! coroutine (pull mode).

pub mod adapters;

use std::fmt;
use std::marker::PhantomData;

pub use adapters::{Copied, Enumerate, Filter, SeqExt};

/// A producer of single values.
pub trait Seq {
    /// Element type handed to the consumer.
    type Item;

    /// Emit each element to `consumer` until it returns `false` or the
    /// elements run out.
    fn produce<C>(&self, consumer: C)
    where
        C: FnMut(Self::Item) -> bool;
}

/// A producer of key/value pairs.
pub trait Seq2 {
    /// Key handed to the consumer alongside each value.
    type Key;
    /// Value type handed to the consumer.
    type Value;

    /// Emit each pair to `consumer` until it returns `false` or the pairs
    /// run out.
    fn produce2<C>(&self, consumer: C)
    where
        C: FnMut(Self::Key, Self::Value) -> bool;
}

impl<S: Seq + ?Sized> Seq for &S {
    type Item = S::Item;

    fn produce<C>(&self, consumer: C)
    where
        C: FnMut(Self::Item) -> bool,
    {
        (**self).produce(consumer)
    }
}

impl<S: Seq2 + ?Sized> Seq2 for &S {
    type Key = S::Key;
    type Value = S::Value;

    fn produce2<C>(&self, consumer: C)
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        (**self).produce2(consumer)
    }
}

/// Sequence backed by a closure that receives the consumer.
///
/// Created by [`from_fn`].
pub struct FromFn<T, F> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> fmt::Debug for FromFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Seq for FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        (self.f)(&mut consumer)
    }
}

/// Turn a closure into a [`Seq`].
///
/// The closure is handed the consumer and must honour its continue signal:
///
/// ```
/// use pullstack::{from_fn, SeqExt};
///
/// let evens = from_fn(|yield_: &mut dyn FnMut(u32) -> bool| {
///     for n in (0..10).step_by(2) {
///         if !yield_(n) {
///             return;
///         }
///     }
/// });
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

/// The integers `0..n`.
#[derive(Debug, Clone, Copy)]
pub struct Ints {
    n: usize,
}

/// Sequence of the first `n` non-negative integers.
pub fn ints(n: usize) -> Ints {
    Ints { n }
}

impl Seq for Ints {
    type Item = usize;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(usize) -> bool,
    {
        for i in 0..self.n {
            if !consumer(i) {
                return;
            }
        }
    }
}

/// The unbounded counter `0, 1, 2, ...`.
///
/// Only safe to drive with a consumer that eventually stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naturals;

/// Infinite sequence of natural numbers.
pub fn naturals() -> Naturals {
    Naturals
}

impl Seq for Naturals {
    type Item = u64;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(u64) -> bool,
    {
        let mut n = 0u64;
        while consumer(n) {
            n = n.wrapping_add(1);
        }
    }
}

/// Borrowing sequence over a slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceSeq<'a, T> {
    items: &'a [T],
}

/// Sequence over the elements of `items`, front to back.
pub fn from_slice<T>(items: &[T]) -> SliceSeq<'_, T> {
    SliceSeq { items }
}

impl<'a, T> Seq for SliceSeq<'a, T> {
    type Item = &'a T;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(&'a T) -> bool,
    {
        for item in self.items {
            if !consumer(item) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints_stops_on_false() {
        let mut seen = Vec::new();
        ints(10).produce(|i| {
            seen.push(i);
            i < 3
        });
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ints_zero_is_empty() {
        let mut calls = 0;
        ints(0).produce(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_naturals_is_lazy() {
        let mut last = None;
        naturals().produce(|n| {
            last = Some(n);
            n < 1_000
        });
        assert_eq!(last, Some(1_000));
    }

    #[test]
    fn test_from_fn_is_reusable() {
        let seq = from_fn(|yield_: &mut dyn FnMut(char) -> bool| {
            for c in ['a', 'b', 'c'] {
                if !yield_(c) {
                    return;
                }
            }
        });
        assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
        assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_reference_is_a_seq() {
        let values = [4, 5, 6];
        let seq = from_slice(&values);
        let by_ref = &seq;
        assert_eq!(by_ref.copied().to_vec(), vec![4, 5, 6]);
    }
}
