//! Contiguous growable array with capacity doubling.
//!
//! [`DynamicArray`] keeps its elements in a single boxed slice of `capacity` slots.
//! Slots past `len` are always `None`, so a removed or cleared element is dropped
//! immediately instead of lingering in the buffer.
//!
//! # Growth
//! ```text
//! add(value):
//!     if len == capacity:
//!         new_buf = [None; capacity * 2]
//!         move data[0..len] into new_buf[0..len]
//!         data = new_buf
//!     data[len] = value
//!     len += 1
//! ```
//! Capacity never shrinks; removal only shifts.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::slice;

use tracing::trace;

use crate::error::{Result, check_access, check_insert};
use crate::sequence::Sequence;
use crate::utils::fmt_sequence;

const TARGET: &str = concat!(module_path!(), "::DynamicArray");

/// A growable array with amortized $O(1)$ append.
///
/// # Invariants
/// * `1 <= capacity` and `len <= capacity`.
/// * `data[..len]` are all `Some`, `data[len..]` are all `None`.
pub struct DynamicArray<T> {
    len: usize,
    data: Box<[Option<T>]>,
}

impl<T> DynamicArray<T> {
    /// Capacity used by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty array with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A requested capacity of zero is raised to one so that doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Self::alloc_slots(capacity.max(1)),
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

    /// Number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Appends `value`, doubling the buffer first if it is full.
    pub fn add(&mut self, value: T) {
        self.ensure_capacity();
        self.data[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting every later element one slot to the right.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len)?;
        self.ensure_capacity();
        self.data[self.len] = Some(value);
        self.data[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_access(index, self.len)?;
        Ok(self.slot(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_access(index, self.len)?;
        Ok(self.slot_mut(index))
    }

    /// Overwrites the element at `index` and returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_access(index, self.len)?;
        Ok(mem::replace(self.slot_mut(index), value))
    }

    /// Removes the element at `index`, shifting every later element one slot to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len)?;
        let removed = self.data[index].take();
        // The emptied slot travels to the end of the occupied prefix.
        self.data[index..self.len].rotate_left(1);
        self.len -= 1;
        match removed {
            Some(value) => Ok(value),
            None => unreachable!("Logic Error: occupied slot {index} was empty"),
        }
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
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

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.data[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data[..self.len].iter(),
        }
    }

    // --- Internals ---

    fn alloc_slots(capacity: usize) -> Box<[Option<T>]> {
        core::iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline(always)]
    fn ensure_capacity(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    #[inline(never)]
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .unwrap_or_else(|| panic!("DynamicArray capacity overflow"));
        let mut data = Self::alloc_slots(new_capacity);
        for (dst, src) in data.iter_mut().zip(&mut self.data[..self.len]) {
            *dst = src.take();
        }
        self.data = data;
        trace!(target: TARGET, old_capacity, new_capacity, "grew buffer");
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> &T {
        match &self.data[index] {
            Some(value) => value,
            None => unreachable!("Logic Error: occupied slot {index} was empty"),
        }
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> &mut T {
        match &mut self.data[index] {
            Some(value) => value,
            None => unreachable!("Logic Error: occupied slot {index} was empty"),
        }
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn add(&mut self, value: T) {
        self.add(value);
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
}

// --- Iterators ---

/// Borrowing iterator over a [`DynamicArray`], front to back.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`DynamicArray`], front to back.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            inner: self.data.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            data: self.data.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

/// Equality ignores capacity.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

/// Starts at [`DEFAULT_CAPACITY`](DynamicArray::DEFAULT_CAPACITY) and doubles like
/// repeated [`add`](DynamicArray::add) calls would.
impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.add(item);
        }
        array
    }
}

impl<T> core::ops::Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for DynamicArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
