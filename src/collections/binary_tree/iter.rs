use std::iter::FusedIterator;

use super::{BinarySearchTree, TreeNode};

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            pending: Vec::new(),
            remaining: self.len,
        };
        iter.descend_left(self.root());
        iter
    }
}

/// A borrowed iterator over a tree's values in ascending order.
pub struct Iter<'a, T> {
    // The nodes on the path to the next value whose own value and right subtree are yet to be
    // yielded.
    pub(crate) pending: Vec<&'a TreeNode<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.pending.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
