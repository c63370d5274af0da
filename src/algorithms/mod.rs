//! Generic sequence algorithms
//!
//! Both algorithms see only the [`Seq`] protocol and never the concrete
//! producer behind it.

use std::cmp::Ordering;

use thiserror::Error;

use crate::pull::Pull;
use crate::seq::{Filter, Seq};

/// Errors reported by the sequence algorithms.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The input produced no elements, so there is no maximum.
    #[error("max of empty sequence")]
    Empty,
}

/// Lazily select the elements of `seq` accepted by `pred`.
///
/// Order is preserved and `pred` runs once per source element that is
/// actually pulled. When the downstream consumer stops, the source stops.
///
/// ```
/// use pullstack::{algorithms::filter, Stack, SeqExt};
///
/// let stack: Stack<i32> = [10, 20, 30].into_iter().collect();
/// let big = filter(stack.seq(), |v| **v > 15);
/// assert_eq!(big.copied().to_vec(), vec![30, 20]);
/// ```
pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(seq, pred)
}

/// Largest element of a finite sequence.
///
/// Ties keep the earliest occurrence. An empty sequence yields
/// [`SequenceError::Empty`]. The whole sequence is consumed, so an
/// unbounded producer never returns.
pub fn max<S>(seq: S) -> Result<S::Item, SequenceError>
where
    S: Seq,
    S::Item: Ord,
{
    max_by(seq, Ord::cmp)
}

/// Largest element under `compare`.
///
/// A later element replaces the running maximum only when `compare`
/// reports it as strictly [`Ordering::Greater`].
pub fn max_by<S, F>(seq: S, mut compare: F) -> Result<S::Item, SequenceError>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut pull = Pull::new(seq);

    let Some(mut best) = pull.next() else {
        tracing::debug!("max over empty sequence");
        return Err(SequenceError::Empty);
    };

    for candidate in pull.by_ref() {
        if compare(&candidate, &best) == Ordering::Greater {
            best = candidate;
        }
    }

    pull.stop();
    Ok(best)
}
