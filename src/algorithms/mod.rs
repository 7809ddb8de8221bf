//! Classic sorting, searching and tree traversal routines.
//!
//! Each routine is independent of the others and of the collection types, except for the
//! traversals, which walk [`TreeNode`](crate::collections::binary_tree::TreeNode)s and use the
//! crate's own [`Stack`](crate::collections::stack::Stack) and
//! [`Queue`](crate::collections::queue::Queue) as frontiers.

#[cfg(feature = "searching")]
pub mod searching;
#[cfg(feature = "sorting")]
pub mod sorting;
#[cfg(feature = "traversal")]
pub mod traversal;
