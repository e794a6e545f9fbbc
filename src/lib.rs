//! # Linear Collections
//!
//! Growable and linked sequence containers with checked, position-based access.
//!
//! This crate provides `DynamicArray`, `SinglyLinkedList` and `DoublyLinkedList`, plus
//! `Stack` and `Queue` adapters built on top of them. Every container exposes the same
//! positional surface (`add`, `add_at`, `get`, `remove_at`, `index_of`, ...) through the
//! [`Sequence`] trait, which is also implemented for `Vec<T>`.
//!
//! ## Key Features
//!
//! * **Checked Access:** Out-of-range positions and empty-list reads return [`Error`]
//!   instead of panicking, and leave the container untouched.
//! * **Doubling Growth:** `DynamicArray` starts at `DEFAULT_CAPACITY` (10) and doubles
//!   its buffer when full; removals shift later elements left.
//! * **Index Arena:** `DoublyLinkedList` stores nodes in parallel slot arrays linked by a
//!   compact [`IndexType`], reuses freed slots, and walks from the nearer end.
//! * **Absent Values:** store `Option<U>` to hold "no value" entries; `None` only ever
//!   compares equal to `None`.
//!
//! ## Cargo Features
//!
//! * `adapters` (default): `Stack`, `Queue`, `StaticArrayQueue` and `is_balanced`.
//!   `StaticArrayQueue` pulls in `heapless` for its inline ring buffer.
//!
//! ## Examples
//!
//! ### DynamicArray
//!
//! ```rust
//! use linear_collections::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for i in 0..11 {
//!     arr.add(i);
//! }
//! assert_eq!(arr.capacity(), 20);
//! assert_eq!(arr.get(10), Ok(&10));
//! assert_eq!(arr.remove_at(0), Ok(0));
//! assert_eq!(arr.get(0), Ok(&1));
//! ```
//!
//! ### DoublyLinkedList
//!
//! ```rust
//! use linear_collections::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.add_first(10);
//! list.add_last(20);
//! list.add(30);
//! list.add_at(2, 49).unwrap();
//! assert_eq!(list.to_string(), "[10, 20, 49, 30]");
//!
//! assert_eq!(list.remove_at(1), Ok(20));
//! assert_eq!(list.remove_first(), Ok(10));
//! assert_eq!(list.remove_last(), Ok(30));
//! assert_eq!(list.to_string(), "[49]");
//! ```
//!
//! ### SinglyLinkedList
//!
//! ```rust
//! use linear_collections::{Error, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::new();
//! assert_eq!(list.remove_first(), Err(Error::EmptyList));
//!
//! list.add_at(0, 5).unwrap();
//! list.add(7);
//! assert_eq!(list.index_of(&7), Some(1));
//! ```

// --- Module Declarations ---

pub mod error;
pub mod lists;
pub mod sequence;
pub mod utils;
pub mod vecs;

#[cfg(feature = "adapters")]
pub mod adapters;

// --- Re-exports ---

pub use error::{Error, Result};
pub use lists::doubly_linked_list::DoublyLinkedList;
pub use lists::singly_linked_list::SinglyLinkedList;
pub use sequence::Sequence;
pub use utils::index_type::IndexType;
pub use vecs::dynamic_array::DynamicArray;

#[cfg(feature = "adapters")]
pub use adapters::{
    queue::Queue,
    stack::{Stack, is_balanced},
    static_array_queue::StaticArrayQueue,
};
