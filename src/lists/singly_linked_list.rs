//! Forward-only linked list built from uniquely owned nodes.
//!
//! Every node owns the remainder of the chain through its `next` box and the list owns
//! `head`. There is no tail pointer, so anything addressing the back of the list walks
//! from the front.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add_first`, `get_first`, `remove_first` | $O(1)$ |
//! | `add_last`, `get_last`, `remove_last` | $O(n)$ |
//! | `add_at`, `get`, `remove_at` | $O(index)$ |
//! | `index_of`, `contains`, `remove(value)` | $O(n)$ |

use core::fmt;
use core::iter::FusedIterator;

use tracing::trace;

use crate::error::{Error, Result, check_access, check_insert};
use crate::sequence::Sequence;
use crate::utils::fmt_sequence;

const TARGET: &str = concat!(module_path!(), "::SinglyLinkedList");

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A singly-linked list with a head pointer and a cached length.
///
/// # Invariants
/// * `len` equals the number of nodes reachable from `head`.
/// * `head` is `None` exactly when `len == 0`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the back. Same as [`add_last`](Self::add_last).
    pub fn add(&mut self, value: T) {
        self.add_last(value);
    }

    pub fn add_first(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data: value, next }));
        self.len += 1;
    }

    /// Appends `value` at the back, walking the whole chain to find it.
    pub fn add_last(&mut self, value: T) {
        let tail = self.link_mut(self.len);
        *tail = Some(Box::new(Node {
            data: value,
            next: None,
        }));
        self.len += 1;
    }

    /// Inserts `value` before the element currently at `index`.
    ///
    /// `index == len` appends; `index == 0` is the same as [`add_first`](Self::add_first).
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len)?;
        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node { data: value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_access(index, self.len)?;
        Ok(&self.node(index).data)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_access(index, self.len)?;
        match self.link_mut(index) {
            Some(node) => Ok(&mut node.data),
            None => unreachable!("Logic Error: chain shorter than len"),
        }
    }

    pub fn get_first(&self) -> Result<&T> {
        self.head
            .as_ref()
            .map(|node| &node.data)
            .ok_or(Error::EmptyList)
    }

    pub fn get_last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(&self.node(self.len - 1).data)
    }

    pub fn remove_first(&mut self) -> Result<T> {
        self.head
            .take()
            .map(|node| {
                let Node { data, next } = *node;
                self.head = next;
                self.len -= 1;
                data
            })
            .ok_or(Error::EmptyList)
    }

    /// Removes the back element by relinking the second-to-last node.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(self.unlink(self.len - 1))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len)?;
        Ok(self.unlink(index))
    }

    /// Removes the first node whose data equals `value`.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Releases every node. The list stays usable.
    pub fn clear(&mut self) {
        let released = self.release_chain();
        trace!(target: TARGET, released, "cleared list");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    // --- Internals ---

    /// Returns the link slot that holds (or would hold) the node at `index`.
    ///
    /// Requires `index <= len`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("Logic Error: chain shorter than len"),
            }
        }
        link
    }

    /// Requires `index < len`.
    fn node(&self, index: usize) -> &Node<T> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref());
        }
        match node {
            Some(node) => node,
            None => unreachable!("Logic Error: chain shorter than len"),
        }
    }

    /// Detaches the node at `index` and returns its data. Requires `index < len`.
    fn unlink(&mut self, index: usize) -> T {
        let link = self.link_mut(index);
        match link.take() {
            Some(node) => {
                let Node { data, next } = *node;
                *link = next;
                self.len -= 1;
                data
            }
            None => unreachable!("Logic Error: chain shorter than len"),
        }
    }

    /// Breaks the chain one link at a time so dropping never recurses.
    fn release_chain(&mut self) -> usize {
        let mut released = 0;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            released += 1;
        }
        self.len = 0;
        released
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn add(&mut self, value: T) {
        self.add_last(value);
    }
    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        self.add_at(index, value)
    }
    fn get(&self, index: usize) -> Result<&T> {
        self.get(index)
    }
    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.remove_at(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(value)
    }
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove(value)
    }
}

// --- Iterators ---

/// Borrowing iterator over a [`SinglyLinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`SinglyLinkedList`], head to tail.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`SinglyLinkedList`], head to tail.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Traits ---

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for item in iter {
            let node = tail.insert(Box::new(Node {
                data: item,
                next: None,
            }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}
