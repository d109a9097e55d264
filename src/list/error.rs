//! Error type for [`SparseList`](crate::SparseList).
//!
//! Every variant is a caller contract violation. Nothing here is retried
//! or recovered internally.

use thiserror::Error;

/// Errors returned by fallible [`SparseList`](crate::SparseList) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SparseListError {
    /// A write addressed a negative (or otherwise unaddressable) index.
    #[error("the value of the index must be greater than or equal to zero")]
    InvalidIndex,
    /// `copy_to` was called without a destination buffer.
    #[error("destination buffer is missing")]
    NullArgument,
    /// `copy_to` was called with a negative destination offset.
    #[error("destination offset is out of range")]
    OutOfRange,
    /// The destination buffer cannot hold `count()` elements from the offset on.
    #[error("destination has room for {available} elements, {needed} required")]
    InsufficientCapacity { needed: usize, available: usize },
}

pub type Result<T, E = SparseListError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::SparseListError;

    fn takes_error(e: &dyn std::error::Error) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_std_error() {
        let s = takes_error(&SparseListError::InvalidIndex);
        assert!(s.contains("greater than or equal to zero"));
    }

    #[test]
    fn test_insufficient_capacity_message() {
        let e = SparseListError::InsufficientCapacity { needed: 2, available: 1 };
        assert_eq!(e.to_string(), "destination has room for 1 elements, 2 required");
    }
}
