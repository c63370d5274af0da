//! Resumable cursor over a stack's chain

use std::fmt;

use super::Node;

/// Independent position in a [`Stack`](super::Stack).
///
/// Holds a borrowed node, never an owning one. Advancing follows `next`
/// and touches neither the stack nor any other cursor. Cloning forks the
/// current position.
pub struct Cursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(node: Option<&'a Node<T>>) -> Self {
        Self { node }
    }

    /// Return the current value and move one node down, or `None` once the
    /// bottom has been passed.
    pub fn advance(&mut self) -> Option<&'a T> {
        let current = self.node?;
        self.node = current.next.as_deref();
        Some(&current.value)
    }

    /// Value the next call to [`advance`](Self::advance) would return.
    pub fn current(&self) -> Option<&'a T> {
        self.node.map(|node| &node.value)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self { node: self.node }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.advance()
    }
}

impl<'a, T> std::iter::FusedIterator for Cursor<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .finish()
    }
}
