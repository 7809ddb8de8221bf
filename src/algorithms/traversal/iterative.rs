use crate::collections::binary_tree::TreeNode;
use crate::collections::stack::Stack;

/// Same output as [`pre_order`](super::pre_order), without recursion.
pub fn pre_order_iterative<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    let mut pending = Stack::new();
    pending.push(root?);

    let mut visited = Vec::new();
    while let Some(node) = pending.pop() {
        visited.push(&node.value);
        // Right goes in first so that left comes out first.
        if let Some(right) = node.right() {
            pending.push(right);
        }
        if let Some(left) = node.left() {
            pending.push(left);
        }
    }

    Some(visited)
}

/// Same output as [`in_order`](super::in_order), without recursion.
pub fn in_order_iterative<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    let mut next = Some(root?);
    let mut pending = Stack::new();
    let mut visited = Vec::new();

    loop {
        // Walk as far left as possible, remembering each node passed on the way down.
        while let Some(node) = next {
            pending.push(node);
            next = node.left();
        }

        match pending.pop() {
            Some(node) => {
                visited.push(&node.value);
                next = node.right();
            },
            None => break,
        }
    }

    Some(visited)
}

/// Same output as [`post_order`](super::post_order), without recursion.
///
/// Produces a right-to-left pre-order (node, right, left) and reverses it.
pub fn post_order_iterative<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    let mut pending = Stack::new();
    pending.push(root?);

    let mut visited = Vec::new();
    while let Some(node) = pending.pop() {
        visited.push(&node.value);
        if let Some(left) = node.left() {
            pending.push(left);
        }
        if let Some(right) = node.right() {
            pending.push(right);
        }
    }

    visited.reverse();
    Some(visited)
}
