//! # `sparse-list`
//!
//! [`SparseList<T>`] is a list-shaped container backed by a sparse map from
//! index to value. It behaves like a dynamically sized array where:
//!
//! - writing at any index `>= 0` extends the logical length to cover it;
//! - reading an index that was never written yields `T::default()`;
//! - removing an element leaves a hole instead of shifting the tail, and the
//!   length is trimmed back past trailing default values.
//!
//! ```
//! use sparse_list::SparseList;
//!
//! let list = SparseList::<i32>::new();
//! list.set(1, 10).unwrap();
//! assert_eq!(list.get(0), 0);
//! assert_eq!(list.get(1), 10);
//! assert_eq!(list.count(), 2);
//! ```
//!
//! Negative indices are accepted on read (they read as the default) and
//! rejected on write with [`SparseListError::InvalidIndex`]. `remove_at`
//! silently ignores them.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` as a plain sequence of elements.

pub mod list;

pub use list::{
    error::{Result, SparseListError},
    index::ListIndex,
    iter::Iter,
    list_trait::ListMethods,
    sparse_list::SparseList,
};
