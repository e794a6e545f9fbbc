//! Compact link types for arena-backed node chains.

use core::fmt::Debug;
use core::hash::Hash;

/// An integer type used as a **node index** inside an arena-backed linked list.
///
/// Instead of pointer-based links, [`DoublyLinkedList`](crate::DoublyLinkedList) stores
/// indices into parallel slot arrays. A narrower index type saves space per link at the
/// cost of a smaller maximum node count.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel meaning "no node" (the end of a chain).
    ///
    /// This is the largest representable value, so it is never a valid slot.
    const NONE: Self;

    /// Converts this index to a `usize` for slot access.
    fn as_usize(self) -> usize;

    /// Converts a slot number to this index type.
    ///
    /// # Panics
    /// Panics if `i` cannot be represented or collides with [`NONE`](IndexType::NONE).
    fn from_usize(i: usize) -> Self;

    /// Returns `true` for the [`NONE`](IndexType::NONE) sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` for any index other than the sentinel.
    #[inline(always)]
    fn is_some(self) -> bool {
        self != Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($ty:ty),*) => {
        $(
            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    match <$ty>::try_from(i) {
                        Ok(idx) if idx != Self::NONE => idx,
                        _ => panic!(
                            "node index {i} exceeds the capacity of a {} index",
                            stringify!($ty)
                        ),
                    }
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
