//! # Push and pull iteration over a linked stack
//!
//! This library shows two ways of walking a sequence without the container
//! keeping any iteration state of its own:
//!
//! 1. **Push**: a producer calls a consumer once per element and stops as
//!    soon as the consumer returns `false` ([`Seq`], [`Seq2`]).
//! 2. **Pull**: the caller asks for one element at a time ([`Pull`],
//!    [`Cursor`]). A push producer becomes pullable by running it on a
//!    suspended local coroutine.
//!
//! [`filter`] and [`max`] are written purely against the push protocol,
//! so they work with any producer: a [`Stack`] traversal, a numeric range,
//! or another filter.
//!
//! ## Usage Example
//!
//! ```
//! use pullstack::{max, Stack, SeqExt, StackError};
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! stack.push(30);
//!
//! let over_15: Vec<i32> = stack.seq().filter(|v| **v > 15).copied().to_vec();
//! assert_eq!(over_15, vec![30, 20]);
//! assert_eq!(max(stack.seq()), Ok(&30));
//!
//! assert_eq!(stack.pop(), Ok(30));
//! assert_eq!(stack.pop(), Ok(20));
//! assert_eq!(stack.pop(), Ok(10));
//! assert_eq!(stack.pop(), Err(StackError::Empty));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algorithms; // Filter and Max over any sequence
pub mod pull;       // Push-to-pull adapter
pub mod seq;        // Sequence protocol and basic producers
pub mod stack;      // Linked stack and cursors

// Re-exports for convenience
pub use algorithms::{filter, max, max_by, SequenceError};
pub use pull::{Pull, DEFAULT_STACK_WORDS};
pub use seq::{from_fn, from_slice, ints, naturals, Copied, Enumerate, Filter, Seq, Seq2, SeqExt};
pub use stack::{Cursor, Stack, StackError, StackSeq};
