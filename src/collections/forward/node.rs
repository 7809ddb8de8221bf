use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are leaked out of a Box when created and reclaimed with take_node, so the owning
// link and any far-end pointer are the same kind of handle. Whichever container links to a node
// owns it.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    // SAFETY (for all of the accessors below): A NodeRef is only created from a live allocation
    // by from_node, and containers only hold NodeRefs to nodes they still own. Containers borrow
    // themselves for at least as long as the returned references.

    pub const fn value<'a>(&self) -> &'a T {
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Follows `steps` links forward from this node.
    pub fn seek(self, steps: usize) -> Option<NodeRef<T>> {
        let mut node = self;
        for _ in 0..steps {
            node = (*node.next())?;
        }
        Some(node)
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Releases the node's allocation, returning the node by value.
    ///
    /// # Safety
    /// Nothing may link to the node anymore (or its container must be discarding every node), and
    /// no other NodeRef to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and, per the caller's guarantee,
        // is released exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub const fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// Releases every node from `link` onwards, one at a time.
///
/// # Safety
/// The chain must be owned by the caller and unreachable from anywhere else once this returns.
pub(crate) unsafe fn drop_chain<T>(mut link: Link<T>) {
    while let Some(node) = link {
        // SAFETY: The caller hands over the whole chain and each node is visited once.
        let node = unsafe { node.take_node() };
        link = node.next;
    }
}
