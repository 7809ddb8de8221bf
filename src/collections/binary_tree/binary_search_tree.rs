use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use tracing::trace;

use super::{AlreadyPresent, Branch, Iter, TreeNode};
use crate::collections::traits::SearchTree;

/// An unbalanced binary search tree holding a set of distinct values.
///
/// For every node, all values in its left subtree compare less than its own value and all values
/// in its right subtree compare greater. There is no rebalancing, so inserting values in sorted
/// order degrades the tree into a list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the tree.
/// - `h`: The height of the tree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `is_present` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new BinarySearchTree with no elements.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node, for use with the functions in
    /// [`algorithms::traversal`](crate::algorithms::traversal).
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns the number of levels in the tree, which is zero for an empty tree. The walk
    /// recurses once per level.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf, returning a reference to it, or [`None`] if an equal value is
    /// already present (in which case `value` is dropped).
    pub fn insert(&mut self, value: T) -> Option<&T> {
        self.try_insert(value).ok()
    }

    /// Inserts `value` as a new leaf, returning the rejected value in an [`Err`] if an equal value
    /// is already present.
    pub fn try_insert(&mut self, value: T) -> Result<&T, AlreadyPresent<T>> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(len = self.len, "rejected duplicate value");
                    return Err(AlreadyPresent(value));
                },
            };
        }

        self.len += 1;
        Ok(&slot.insert(Box::new(TreeNode::leaf(value))).value)
    }

    /// Returns true if a value equal to `value` is in the tree.
    pub fn is_present(&self, value: &T) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// An alias of [`BinarySearchTree::is_present`].
    pub fn contains(&self, value: &T) -> bool {
        self.is_present(value)
    }

    /// Returns the smallest value in the tree, if it isn't empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, if it isn't empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }
}

/// Releases a subtree without recursing once per level.
fn release<T>(branch: Branch<T>) {
    let mut pending: Vec<Box<TreeNode<T>>> = branch.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl<T: Ord> SearchTree<T> for BinarySearchTree<T> {
    fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).is_ok()
    }

    fn is_present(&self, value: &T) -> bool {
        BinarySearchTree::is_present(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Inserts every item in order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugBranch(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

/// Draws a branch sideways: the left subtree above, the node itself, then the right subtree
/// below.
struct DebugBranch<'a, T>(&'a Branch<T>);

impl<T: Debug> Debug for DebugBranch<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", DebugBranch(&node.left))
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", DebugBranch(&node.right))
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
