#![cfg(test)]

use super::*;
use crate::collections::binary_tree::{BinarySearchTree, TreeNode};

type Traversal = for<'a> fn(Option<&'a TreeNode<i32>>) -> Option<Vec<&'a i32>>;

const TRAVERSALS: [(&str, Traversal); 7] = [
    ("pre_order", pre_order),
    ("in_order", in_order),
    ("post_order", post_order),
    ("bfs", bfs),
    ("pre_order_iterative", pre_order_iterative),
    ("in_order_iterative", in_order_iterative),
    ("post_order_iterative", post_order_iterative),
];

fn values(visited: Option<Vec<&i32>>) -> Option<Vec<i32>> {
    visited.map(|values| values.into_iter().copied().collect())
}

/// ```text
///         1
///       /   \
///      2     3
///     / \     \
///    4   5     6
///       /
///      7
/// ```
fn sample_tree() -> TreeNode<i32> {
    TreeNode::new(
        1,
        Some(TreeNode::new(
            2,
            Some(TreeNode::leaf(4)),
            Some(TreeNode::leaf(5).with_left(TreeNode::leaf(7))),
        )),
        Some(TreeNode::leaf(3).with_right(TreeNode::leaf(6))),
    )
}

#[test]
fn test_three_node_tree() {
    let tree = TreeNode::leaf(5)
        .with_left(TreeNode::leaf(3))
        .with_right(TreeNode::leaf(8));
    let root = Some(&tree);

    assert_eq!(values(pre_order(root)), Some(vec![5, 3, 8]));
    assert_eq!(values(in_order(root)), Some(vec![3, 5, 8]));
    assert_eq!(values(post_order(root)), Some(vec![3, 8, 5]));
    assert_eq!(values(bfs(root)), Some(vec![5, 3, 8]));
}

#[test]
fn test_empty_tree() {
    for (name, traversal) in TRAVERSALS {
        assert_eq!(traversal(None), None, "{name} should return nothing for an empty tree.");
    }
}

#[test]
fn test_single_node() {
    let tree = TreeNode::leaf(42);

    for (name, traversal) in TRAVERSALS {
        assert_eq!(values(traversal(Some(&tree))), Some(vec![42]), "{name} should visit the root.");
    }
}

#[test]
fn test_uneven_tree() {
    let tree = sample_tree();
    let root = Some(&tree);

    assert_eq!(values(pre_order(root)), Some(vec![1, 2, 4, 5, 7, 3, 6]));
    assert_eq!(values(in_order(root)), Some(vec![4, 2, 7, 5, 1, 3, 6]));
    assert_eq!(values(post_order(root)), Some(vec![4, 7, 5, 2, 6, 3, 1]));
    assert_eq!(values(bfs(root)), Some(vec![1, 2, 3, 4, 5, 6, 7]));
}

#[test]
fn test_iterative_agrees_with_recursive() {
    let tree = sample_tree();
    let search_tree = BinarySearchTree::from_iter([50, 30, 70, 20, 40, 60, 80, 35, 45, 65, 10]);

    for root in [Some(&tree), search_tree.root()] {
        assert_eq!(pre_order_iterative(root), pre_order(root));
        assert_eq!(in_order_iterative(root), in_order(root));
        assert_eq!(post_order_iterative(root), post_order(root));
    }
}

#[test]
fn test_search_tree_in_order_is_sorted() {
    let tree = BinarySearchTree::from_iter([5, 9, 1, 7, 3, 8, 2]);

    assert_eq!(values(in_order(tree.root())), Some(vec![1, 2, 3, 5, 7, 8, 9]));
    assert_eq!(values(bfs(tree.root())), Some(vec![5, 1, 9, 3, 7, 2, 8]));
    assert!(in_order(tree.root()).into_iter().flatten().eq(tree.iter()));
}

#[test]
fn test_deep_tree_iterative() {
    // A long path that the iterative traversals handle without deep recursion.
    let tree = BinarySearchTree::from_iter(0..5_000);

    let visited = in_order_iterative(tree.root()).unwrap_or_default();
    assert_eq!(visited.len(), 5_000);
    assert!(visited.into_iter().copied().eq(0..5_000));

    let visited = post_order_iterative(tree.root()).unwrap_or_default();
    assert_eq!(visited.first(), Some(&&4_999));
    assert_eq!(bfs(tree.root()).map(|visited| visited.len()), Some(5_000));
}
