use crate::collections::binary_tree::TreeNode;
use crate::collections::queue::Queue;

/// Visits the tree level by level, left to right within each level.
///
/// Nodes wait in a [`Queue`] until their turn, so the frontier holds at most one level of the
/// tree at a time.
pub fn bfs<T>(root: Option<&TreeNode<T>>) -> Option<Vec<&T>> {
    let mut frontier = Queue::new();
    frontier.enqueue(root?);

    let mut visited = Vec::new();
    while let Some(node) = frontier.dequeue() {
        visited.push(&node.value);
        if let Some(left) = node.left() {
            frontier.enqueue(left);
        }
        if let Some(right) = node.right() {
            frontier.enqueue(right);
        }
    }

    Some(visited)
}
