//! Bidirectional linked list stored in an index arena.
//!
//! # Implementation details
//! - **Struct-of-Arrays**: `values`, `prevs` and `nexts` are parallel slot arrays. A node
//!   is a slot number of type `I: IndexType`; `I::NONE` ends a chain.
//! - **Ownership**: the `next` chain starting at `head` is the owning path through the
//!   list. `prevs` and `tail` are back-references used only to navigate.
//! - **Free list**: released slots are threaded through `nexts` starting at `free_head`
//!   and reused before the arena grows.
//! - **Nearest end**: positional operations walk forward from `head` when
//!   `index < len / 2` and backward from `tail` otherwise.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use tracing::trace;

use crate::error::{Error, Result, check_access, check_insert};
use crate::sequence::Sequence;
use crate::utils::fmt_sequence;
use crate::utils::index_type::IndexType;

const TARGET: &str = concat!(module_path!(), "::DoublyLinkedList");

/// A doubly-linked list with $O(1)$ access to both ends.
///
/// `I` picks the width of the links. The default `u32` allows a little over four
/// billion live slots; `u16` or `u8` shrink each link for small lists.
///
/// Removals put slots on the free list instead of returning them, so the arena stays at
/// its peak size until [`clear`](Self::clear) or [`shrink_to_fit`](Self::shrink_to_fit).
///
/// # Invariants
/// * `len` equals the number of nodes reachable from `head` through `nexts`.
/// * `head` and `tail` are both `NONE` exactly when `len == 0`.
/// * For every live node `n` with `nexts[n] != NONE`: `prevs[nexts[n]] == n`.
/// * `prevs[head] == NONE` and `nexts[tail] == NONE`.
/// * A slot holds `Some` value exactly when it is live.
#[derive(Clone)]
pub struct DoublyLinkedList<T, I: IndexType = u32> {
    values: Vec<Option<T>>,
    prevs: Vec<I>,
    nexts: Vec<I>,
    free_head: I,
    head: I,
    tail: I,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list with `u32` links.
    pub fn new() -> Self {
        Self::with_index_type()
    }

    /// Creates an empty list with `u32` links and arena room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_index_type(capacity)
    }
}

impl<T, I: IndexType> DoublyLinkedList<T, I> {
    /// Creates an empty list whose link width is chosen by the caller.
    ///
    /// ```
    /// use linear_collections::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::<char, u8>::with_index_type();
    /// list.add('x');
    /// assert_eq!(list.get_first(), Ok(&'x'));
    /// ```
    pub fn with_index_type() -> Self {
        Self::with_capacity_and_index_type(0)
    }

    pub fn with_capacity_and_index_type(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            prevs: Vec::with_capacity(capacity),
            nexts: Vec::with_capacity(capacity),
            free_head: I::NONE,
            head: I::NONE,
            tail: I::NONE,
            len: 0,
        }
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
        let idx = self.alloc(value);
        self.attach_front(idx);
        self.len += 1;
    }

    pub fn add_last(&mut self, value: T) {
        let idx = self.alloc(value);
        self.attach_back(idx);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// The node currently at `index` is located from whichever end is closer.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len)?;
        if index == self.len {
            self.add_last(value);
            return Ok(());
        }
        let at = self.node_at(index);
        let idx = self.alloc(value);
        self.attach_before(idx, at);
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_access(index, self.len)?;
        Ok(self.value(self.node_at(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_access(index, self.len)?;
        let idx = self.node_at(index);
        Ok(self.value_mut(idx))
    }

    /// Overwrites the element at `index` and returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    pub fn get_first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(self.value(self.head))
    }

    pub fn get_last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(self.value(self.tail))
    }

    pub fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(self.remove_node(self.head))
    }

    pub fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(self.remove_node(self.tail))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len)?;
        let idx = self.node_at(index);
        Ok(self.remove_node(idx))
    }

    /// Removes the first node whose data equals `value`.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Some((_, idx)) => {
                self.remove_node(idx);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find(value).map(|(pos, _)| pos)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Releases every node. Arena capacity is kept for reuse.
    pub fn clear(&mut self) {
        let released = self.len;
        self.values.clear();
        self.prevs.clear();
        self.nexts.clear();
        self.free_head = I::NONE;
        self.head = I::NONE;
        self.tail = I::NONE;
        self.len = 0;
        trace!(target: TARGET, released, "cleared list");
    }

    /// Compacts live nodes into the first `len` slots, in list order, and releases the
    /// rest of the arena.
    pub fn shrink_to_fit(&mut self) {
        let slots = self.values.len();
        if slots > self.len {
            let mut values = Vec::with_capacity(self.len);
            let mut cur = self.head;
            while cur.is_some() {
                let slot = cur.as_usize();
                cur = self.nexts[slot];
                values.push(self.values[slot].take());
            }
            let n = values.len();
            self.prevs = (0..n)
                .map(|i| if i == 0 { I::NONE } else { I::from_usize(i - 1) })
                .collect();
            self.nexts = (0..n)
                .map(|i| if i + 1 == n { I::NONE } else { I::from_usize(i + 1) })
                .collect();
            self.values = values;
            self.free_head = I::NONE;
            if n == 0 {
                self.head = I::NONE;
                self.tail = I::NONE;
            } else {
                self.head = I::from_usize(0);
                self.tail = I::from_usize(n - 1);
            }
            trace!(target: TARGET, released = slots - n, "compacted node arena");
        }
        self.values.shrink_to_fit();
        self.prevs.shrink_to_fit();
        self.nexts.shrink_to_fit();
    }

    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // --- Internals ---

    /// Returns the slot holding the node at `index`, walking from the nearer end.
    ///
    /// Requires `index < len`.
    fn node_at(&self, index: usize) -> I {
        if index < self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = self.nexts[cur.as_usize()];
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in index + 1..self.len {
                cur = self.prevs[cur.as_usize()];
            }
            cur
        }
    }

    /// Position and slot of the first node equal to `value`.
    fn find(&self, value: &T) -> Option<(usize, I)>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        let mut pos = 0;
        while cur.is_some() {
            if self.value(cur) == value {
                return Some((pos, cur));
            }
            cur = self.nexts[cur.as_usize()];
            pos += 1;
        }
        None
    }

    /// Single exit path for every removal: unlink, then release the slot.
    fn remove_node(&mut self, idx: I) -> T {
        self.detach(idx);
        self.release(idx)
    }

    /// Takes a slot from the free list, or grows the arena by one.
    fn alloc(&mut self, value: T) -> I {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = idx.as_usize();
            self.free_head = self.nexts[slot];
            self.values[slot] = Some(value);
            self.nexts[slot] = I::NONE;
            idx
        } else {
            let slot = self.values.len();
            let idx = I::from_usize(slot);
            if slot == self.values.capacity() {
                trace!(target: TARGET, slots = slot, "growing node arena");
            }
            self.values.push(Some(value));
            self.prevs.push(I::NONE);
            self.nexts.push(I::NONE);
            idx
        }
    }

    /// Clears a detached slot's data and links and pushes it on the free list.
    fn release(&mut self, idx: I) -> T {
        let slot = idx.as_usize();
        let data = self.values[slot].take();
        self.prevs[slot] = I::NONE;
        self.nexts[slot] = self.free_head;
        self.free_head = idx;
        self.len -= 1;
        match data {
            Some(value) => value,
            None => unreachable!("Logic Error: released slot {slot} was already free"),
        }
    }

    /// Unlinks a node, patching `head`/`tail` when it sits at a boundary.
    fn detach(&mut self, idx: I) {
        let (p, n) = (self.prevs[idx.as_usize()], self.nexts[idx.as_usize()]);
        if p.is_some() {
            self.nexts[p.as_usize()] = n;
        } else {
            self.head = n;
        }
        if n.is_some() {
            self.prevs[n.as_usize()] = p;
        } else {
            self.tail = p;
        }
    }

    fn attach_front(&mut self, idx: I) {
        self.prevs[idx.as_usize()] = I::NONE;
        self.nexts[idx.as_usize()] = self.head;
        if self.head.is_some() {
            self.prevs[self.head.as_usize()] = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    fn attach_back(&mut self, idx: I) {
        self.nexts[idx.as_usize()] = I::NONE;
        self.prevs[idx.as_usize()] = self.tail;
        if self.tail.is_some() {
            self.nexts[self.tail.as_usize()] = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
    }

    /// Links `idx` immediately before the live node `at`.
    fn attach_before(&mut self, idx: I, at: I) {
        let p = self.prevs[at.as_usize()];
        self.prevs[idx.as_usize()] = p;
        self.nexts[idx.as_usize()] = at;
        self.prevs[at.as_usize()] = idx;
        if p.is_some() {
            self.nexts[p.as_usize()] = idx;
        } else {
            self.head = idx;
        }
    }

    #[inline(always)]
    fn value(&self, idx: I) -> &T {
        match &self.values[idx.as_usize()] {
            Some(value) => value,
            None => unreachable!("Logic Error: live node {idx:?} has no data"),
        }
    }

    #[inline(always)]
    fn value_mut(&mut self, idx: I) -> &mut T {
        match &mut self.values[idx.as_usize()] {
            Some(value) => value,
            None => unreachable!("Logic Error: live node {idx:?} has no data"),
        }
    }

    /// Walks the whole structure and asserts every link invariant.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        if self.len == 0 {
            assert!(self.head.is_none() && self.tail.is_none());
        } else {
            assert!(self.prevs[self.head.as_usize()].is_none(), "head.prev set");
            assert!(self.nexts[self.tail.as_usize()].is_none(), "tail.next set");
        }

        let mut steps = 0;
        let mut prev = I::NONE;
        let mut cur = self.head;
        while cur.is_some() {
            assert!(steps < self.len, "chain longer than len");
            assert_eq!(self.prevs[cur.as_usize()], prev, "broken prev link");
            assert!(self.values[cur.as_usize()].is_some(), "live node without data");
            prev = cur;
            cur = self.nexts[cur.as_usize()];
            steps += 1;
        }
        assert_eq!(steps, self.len, "len does not match reachable nodes");
        assert_eq!(prev, self.tail, "tail is not the last reachable node");

        let mut free = 0;
        let mut cur = self.free_head;
        while cur.is_some() {
            assert!(self.values[cur.as_usize()].is_none(), "free slot holds data");
            cur = self.nexts[cur.as_usize()];
            free += 1;
        }
        assert_eq!(free + self.len, self.values.len(), "leaked arena slots");
    }
}

impl<T, I: IndexType> Sequence<T> for DoublyLinkedList<T, I> {
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

/// Borrowing iterator over a [`DoublyLinkedList`], head to tail.
pub struct Iter<'a, T, I: IndexType = u32> {
    list: &'a DoublyLinkedList<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.list.nexts[idx.as_usize()];
        self.remaining -= 1;
        Some(self.list.value(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for Iter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.list.prevs[idx.as_usize()];
        self.remaining -= 1;
        Some(self.list.value(idx))
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}
impl<T, I: IndexType> FusedIterator for Iter<'_, T, I> {}

/// Owning iterator over a [`DoublyLinkedList`], head to tail.
pub struct IntoIter<T, I: IndexType = u32> {
    list: DoublyLinkedList<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<T> {
        self.list.remove_last().ok()
    }
}

impl<T, I: IndexType> ExactSizeIterator for IntoIter<T, I> {}
impl<T, I: IndexType> FusedIterator for IntoIter<T, I> {}

impl<T, I: IndexType> IntoIterator for DoublyLinkedList<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a DoublyLinkedList<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T, I: IndexType> Default for DoublyLinkedList<T, I> {
    fn default() -> Self {
        Self::with_index_type()
    }
}

impl<T, I: IndexType> FromIterator<T> for DoublyLinkedList<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity_and_index_type(iter.size_hint().0);
        for item in iter {
            list.add_last(item);
        }
        list
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for DoublyLinkedList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, I: IndexType> fmt::Display for DoublyLinkedList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

/// Compares element order only; arena layout is ignored.
impl<T: PartialEq, I: IndexType> PartialEq for DoublyLinkedList<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, I: IndexType> Eq for DoublyLinkedList<T, I> {}
