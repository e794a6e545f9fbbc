//! Common interface over ordered sequences with positional and value-based access.

use crate::error::{Result, check_access, check_insert};

/// An abstraction over ordered, mutable sequences.
///
/// Implemented by [`DynamicArray`](crate::DynamicArray),
/// [`SinglyLinkedList`](crate::SinglyLinkedList),
/// [`DoublyLinkedList`](crate::DoublyLinkedList) and `std::vec::Vec<T>`, so code
/// can drive any of them without knowing which storage strategy is behind it.
pub trait Sequence<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element at the end.
    fn add(&mut self, value: T);

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index > len`.
    fn add_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` if any element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether one was removed.
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Sequence<T> for std::vec::Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn add(&mut self, value: T) {
        self.push(value);
    }
    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len())?;
        self.insert(index, value);
        Ok(())
    }
    fn get(&self, index: usize) -> Result<&T> {
        check_access(index, self.len())?;
        Ok(&self[index])
    }
    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len())?;
        Ok(self.remove(index))
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }
}
