//! An unbalanced [`BinarySearchTree`] and the [`TreeNode`] shape it shares with the traversals in
//! [`algorithms::traversal`](crate::algorithms::traversal).

mod binary_search_tree;
mod error;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use error::*;
pub use iter::*;
pub use node::*;
