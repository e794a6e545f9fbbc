use core::fmt;

use crate::error::{Error, Result};
use crate::lists::doubly_linked_list::{DoublyLinkedList, Iter};
use crate::utils::fmt_sequence;

/// Unbounded FIFO queue on top of a [`DoublyLinkedList`].
///
/// Elements enter at the tail and leave from the head, both in $O(1)$.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates a queue holding a single element.
    pub fn with_first(first: T) -> Self {
        let mut queue = Self::new();
        queue.enqueue(first);
        queue
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.add_last(value);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_first().map_err(|_| Error::EmptyQueue)
    }

    pub fn peek(&self) -> Result<&T> {
        self.list.get_first().map_err(|_| Error::EmptyQueue)
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}
