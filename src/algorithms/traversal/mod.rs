//! Binary tree traversals over [`TreeNode`](crate::collections::binary_tree::TreeNode).
//!
//! Every traversal takes an optional root and returns `None` for an empty tree, otherwise a
//! reference to every value in visiting order. The recursive versions use one call frame per level
//! of the tree, while the `_iterative` versions keep their frontier in a heap allocated
//! [`Stack`](crate::collections::stack::Stack), for trees too deep to recurse through.

mod breadth_first;
mod iterative;
mod recursive;
mod tests;

pub use breadth_first::*;
pub use iterative::*;
pub use recursive::*;
