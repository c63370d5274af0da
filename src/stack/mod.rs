//! Singly linked LIFO stack
//!
//! Each node is owned by the node above it (the head is owned by the stack),
//! so popping or dropping releases nodes one at a time. Traversals never
//! store their position in the stack: a [`Cursor`] or [`StackSeq`] borrows
//! the chain and keeps its own place, and any number of them may be alive
//! at once.

mod cursor;

pub use cursor::Cursor;

use std::fmt;

use thiserror::Error;

use crate::seq::{Enumerate, Seq, SeqExt};

/// Errors reported by [`Stack`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` on a stack with no elements.
    #[error("empty stack")]
    Empty,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Generic LIFO stack backed by a singly linked list.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Push `value` on top. O(1).
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Remove and return the top value. O(1).
    pub fn pop(&mut self) -> Result<T, StackError> {
        let Some(node) = self.head.take() else {
            tracing::trace!("pop on empty stack");
            return Err(StackError::Empty);
        };
        let node = *node;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Borrow the top value, if any.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Independent cursor positioned at the current top.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.as_deref())
    }

    /// Top-to-bottom traversal as a push-style sequence.
    pub fn seq(&self) -> StackSeq<'_, T> {
        StackSeq { stack: self }
    }

    /// Top-to-bottom traversal paired with 0-based positions.
    pub fn indexed(&self) -> Enumerate<StackSeq<'_, T>> {
        self.seq().enumerate()
    }

    /// Visit every element top to bottom. There is no way to stop early;
    /// use [`Stack::seq`] for that.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            f(&current.value);
            node = current.next.as_deref();
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cursor()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.cursor()
    }
}

/// Push-style traversal of a [`Stack`], top to bottom.
#[derive(Debug)]
pub struct StackSeq<'a, T> {
    stack: &'a Stack<T>,
}

impl<'a, T> Clone for StackSeq<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for StackSeq<'a, T> {}

impl<'a, T> Seq for StackSeq<'a, T> {
    type Item = &'a T;

    fn produce<C>(&self, mut consumer: C)
    where
        C: FnMut(&'a T) -> bool,
    {
        let mut node = self.stack.head.as_deref();
        while let Some(current) = node {
            if !consumer(&current.value) {
                return;
            }
            node = current.next.as_deref();
        }
    }
}
