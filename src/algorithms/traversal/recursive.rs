use crate::collections::binary_tree::TreeNode;

/// Visits each node before its left and then right subtrees.
pub fn pre_order<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    fn visit<'a, T>(node: &'a TreeNode<T>, visited: &mut Vec<&'a T>) {
        visited.push(&node.value);
        if let Some(left) = node.left() {
            visit(left, visited);
        }
        if let Some(right) = node.right() {
            visit(right, visited);
        }
    }

    let mut visited = Vec::new();
    visit(root?, &mut visited);
    Some(visited)
}

/// Visits each node between its left and right subtrees. For a search tree this is ascending
/// order.
pub fn in_order<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    fn visit<'a, T>(node: &'a TreeNode<T>, visited: &mut Vec<&'a T>) {
        if let Some(left) = node.left() {
            visit(left, visited);
        }
        visited.push(&node.value);
        if let Some(right) = node.right() {
            visit(right, visited);
        }
    }

    let mut visited = Vec::new();
    visit(root?, &mut visited);
    Some(visited)
}

/// Visits each node after both of its subtrees.
pub fn post_order<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    fn visit<'a, T>(node: &'a TreeNode<T>, visited: &mut Vec<&'a T>) {
        if let Some(left) = node.left() {
            visit(left, visited);
        }
        if let Some(right) = node.right() {
            visit(right, visited);
        }
        visited.push(&node.value);
    }

    let mut visited = Vec::new();
    visit(root?, &mut visited);
    Some(visited)
}
