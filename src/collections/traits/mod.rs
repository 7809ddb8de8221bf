//! Capability traits shared by the collection types.
//!
//! Each container implements its capabilities through inherent methods first, so these traits are
//! only needed when writing code that is generic over several containers.

mod indexed_list;
mod linear;
mod search_tree;

pub use indexed_list::*;
pub use linear::*;
pub use search_tree::*;

pub use crate::util::error::IndexOutOfBounds;
