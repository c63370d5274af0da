//! Sequence adapters
//!
//! Each adapter wraps a source [`Seq`] and is itself a sequence, so they
//! compose without materialising anything.

use super::{Seq, Seq2};
use crate::pull::Pull;

/// Forwards only the elements accepted by a predicate.
///
/// Created by [`SeqExt::filter`] or [`crate::algorithms::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        // Rejected elements keep the source running; a downstream stop is
        // passed straight back to the source.
        self.source.produce(|item| {
            if (self.pred)(&item) {
                consumer(item)
            } else {
                true
            }
        })
    }
}

/// Pairs each element with its 0-based position in the traversal.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Seq> Seq2 for Enumerate<S> {
    type Key = usize;
    type Value = S::Item;

    fn produce2<C>(&self, mut consumer: C)
    where
        C: FnMut(usize, S::Item) -> bool,
    {
        let mut index = 0;
        self.source.produce(|item| {
            let key = index;
            index += 1;
            consumer(key, item)
        })
    }
}

/// Copies borrowed elements out of a sequence of references.
#[derive(Debug, Clone)]
pub struct Copied<S> {
    source: S,
}

impl<'a, T, S> Seq for Copied<S>
where
    T: Copy + 'a,
    S: Seq<Item = &'a T>,
{
    type Item = T;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        self.source.produce(|item| consumer(*item))
    }
}

/// Combinators available on every [`Seq`].
pub trait SeqExt: Seq + Sized {
    /// Lazily keep only the elements for which `pred` returns `true`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// View the sequence as `(position, element)` pairs.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Copy elements out of a sequence of references.
    fn copied<'a, T>(self) -> Copied<Self>
    where
        T: Copy + 'a,
        Self: Seq<Item = &'a T>,
    {
        Copied { source: self }
    }

    /// Consume the sequence one element at a time.
    fn pull<'a>(self) -> Pull<'a, Self::Item>
    where
        Self: 'a,
        Self::Item: 'a,
    {
        Pull::new(self)
    }

    /// Drive the sequence to completion and collect every element.
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.produce(|item| {
            out.push(item);
            true
        });
        out
    }
}

impl<S: Seq> SeqExt for S {}
