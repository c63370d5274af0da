//! Pull adapter
//!
//! Turns a push-style [`Seq`] into a one-at-a-time source. The producer runs
//! on a local stackful coroutine: each time it hands an element to its
//! consumer the coroutine suspends, and `next` resumes it with a `true`
//! continue signal. `stop` resumes it once more with `false` so the producer
//! returns through its normal path and drops whatever it holds.
//!
//! Everything happens on the calling thread; the coroutine only runs inside
//! `next` and `stop`.

use std::fmt;
use std::iter::FusedIterator;

use generator::{Gn, LocalGenerator};

use crate::seq::Seq;

/// Coroutine stack size, in machine words, used by [`Pull::new`].
///
/// 2 MiB on 64-bit targets, matching the default for spawned threads.
pub const DEFAULT_STACK_WORDS: usize = 0x4_0000;

/// Pull-style view over a push-style sequence.
///
/// The producer is not started until the first call to [`Iterator::next`].
/// Dropping a `Pull` stops it, so a partially consumed adapter never leaves
/// a suspended producer behind.
///
/// The producer runs on its own coroutine stack of
/// [`DEFAULT_STACK_WORDS`] machine words unless a size is given through
/// [`Pull::with_stack_size`]. Stack use beyond that (deep recursion, large
/// locals) faults the process rather than panicking, so producers with
/// heavy frames need a bigger stack.
///
/// ```
/// use pullstack::{ints, SeqExt};
///
/// let mut pull = ints(3).pull();
/// assert_eq!(pull.next(), Some(0));
/// assert_eq!(pull.next(), Some(1));
/// pull.stop();
/// assert_eq!(pull.next(), None);
/// ```
pub struct Pull<'a, T> {
    /// `None` once exhausted or stopped.
    coroutine: Option<LocalGenerator<'a, bool, Option<T>>>,
    started: bool,
    delivered: usize,
}

impl<'a, T: 'a> Pull<'a, T> {
    /// Wrap `seq` without driving it.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        Self::with_stack_size(seq, DEFAULT_STACK_WORDS)
    }

    /// Wrap `seq`, running it on a coroutine stack of `words` machine words.
    pub fn with_stack_size<S>(seq: S, words: usize) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        let coroutine = Gn::<bool>::new_scoped_opt_local(words, move |mut scope| {
            seq.produce(|item| matches!(scope.yield_(Some(item)), Some(true)));
            None
        });

        Self {
            coroutine: Some(coroutine),
            started: false,
            delivered: 0,
        }
    }
}

impl<'a, T> Pull<'a, T> {
    /// Whether the producer has been exhausted or stopped.
    pub fn is_done(&self) -> bool {
        self.coroutine.is_none()
    }

    /// Number of elements handed out so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Stop the producer early and release its suspended state.
    ///
    /// Safe to call any number of times; later calls to `next` return `None`.
    pub fn stop(&mut self) {
        let Some(mut coroutine) = self.coroutine.take() else {
            return;
        };

        if !self.started || coroutine.is_done() {
            return;
        }

        tracing::debug!(delivered = self.delivered, "stopping pull adapter early");
        if coroutine.raw_send(Some(false)).flatten().is_some() {
            // The producer ignored the stop signal; dropping the coroutine
            // unwinds its stack instead.
            tracing::warn!("producer emitted after being told to stop");
        }
    }
}

impl<'a, T> Iterator for Pull<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let coroutine = self.coroutine.as_mut()?;
        if coroutine.is_done() {
            self.coroutine = None;
            return None;
        }

        self.started = true;
        match coroutine.raw_send(Some(true)).flatten() {
            Some(item) => {
                self.delivered += 1;
                Some(item)
            }
            None => {
                tracing::trace!(delivered = self.delivered, "pull adapter exhausted");
                self.coroutine = None;
                None
            }
        }
    }
}

impl<'a, T> FusedIterator for Pull<'a, T> {}

impl<'a, T> Drop for Pull<'a, T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<'a, T> fmt::Debug for Pull<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pull")
            .field("started", &self.started)
            .field("done", &self.is_done())
            .field("delivered", &self.delivered)
            .finish()
    }
}
