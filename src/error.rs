//! Error type shared by every container in the crate.

use derive_more::derive::{Display, Error};

/// Errors returned by positional accessors and by the `*_first`/`*_last` family.
///
/// Value lookups (`contains`, `index_of`, `remove(value)`) never produce an error;
/// "not found" is reported through `bool`/`Option` instead.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Index was past the valid bound for the operation.
    ///
    /// The bound is `len` for insertion and `len - 1` for access and removal.
    #[display("Index {index} is out of bounds for length {len}.")]
    IndexOutOfRange { index: usize, len: usize },

    /// Front/back access or removal on a list with no nodes.
    #[display("List is empty")]
    EmptyList,

    /// `pop`/`peek` on a stack with no elements.
    #[cfg(feature = "adapters")]
    #[display("Stack is empty")]
    EmptyStack,

    /// `dequeue`/`peek` on a queue with no elements.
    #[cfg(feature = "adapters")]
    #[display("Queue is empty")]
    EmptyQueue,
}

/// Shorthand for results produced by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Returns `Ok(())` when `index < len`.
#[inline(always)]
pub(crate) fn check_access(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Returns `Ok(())` when `index <= len`, i.e. `index` is a valid insertion point.
#[inline(always)]
pub(crate) fn check_insert(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 is out of bounds for length 3.");
        assert_eq!(Error::EmptyList.to_string(), "List is empty");
    }

    #[cfg(feature = "adapters")]
    #[test]
    fn test_error_adapter_messages() {
        assert_eq!(Error::EmptyStack.to_string(), "Stack is empty");
        assert_eq!(Error::EmptyQueue.to_string(), "Queue is empty");
    }

    #[test]
    fn test_error_bounds_checks() {
        assert!(check_access(0, 1).is_ok());
        assert_eq!(
            check_access(1, 1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(check_insert(1, 1).is_ok());
        assert!(check_insert(0, 0).is_ok());
        assert_eq!(
            check_insert(2, 1),
            Err(Error::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::EmptyList);
    }

    #[test]
    fn test_error_reexport_is_the_enum() {
        // The crate-root path and the module path name the same type.
        let err: crate::Error = Error::IndexOutOfRange { index: 1, len: 0 };
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "Index 1 is out of bounds for length 0.");
        assert!(boxed.source().is_none());
    }
}
