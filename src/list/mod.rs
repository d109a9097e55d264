pub mod error;
pub mod index;
pub mod iter;
pub mod list_trait;
pub mod sparse_list;

mod hash_map;
#[cfg(feature = "serde")]
mod serde;
