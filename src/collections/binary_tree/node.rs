use std::cmp;

/// An owning link to a subtree, which may be empty.
pub type Branch<T> = Option<Box<TreeNode<T>>>;

/// A binary tree node owning both of its children.
///
/// This is the node shape used by [`BinarySearchTree`](super::BinarySearchTree) and accepted by
/// the traversal functions. It places no ordering requirements on its values by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Branch<T>,
    pub right: Branch<T>,
}

impl<T> TreeNode<T> {
    /// Creates a node with no children.
    pub const fn leaf(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the provided children.
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> TreeNode<T> {
        TreeNode {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replaces the left child, for building trees by hand.
    pub fn with_left(mut self, left: TreeNode<T>) -> TreeNode<T> {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right child, for building trees by hand.
    pub fn with_right(mut self, right: TreeNode<T>) -> TreeNode<T> {
        self.right = Some(Box::new(right));
        self
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes on the longest path from this node down to a leaf, counting
    /// both ends. Recurses once per level.
    pub fn height(&self) -> usize {
        1 + cmp::max(
            self.left().map_or(0, TreeNode::height),
            self.right().map_or(0, TreeNode::height),
        )
    }
}
