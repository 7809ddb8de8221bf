use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated with Box<T> so that releasing one moves its value back out of the
// heap. A node is owned by the list that links to it; NodeRef itself is just a copyable handle.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    // SAFETY (for all of the accessors below): A NodeRef is only ever created from a live
    // allocation by from_node, and lists only hand out NodeRefs to nodes they still own. Lists
    // borrow themselves for at least as long as the returned references.

    pub const fn value<'a>(&self) -> &'a T {
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Exchanges this node's prev and next links.
    pub fn swap_links(&self) {
        // SAFETY: As above; the two fields are disjoint.
        let node = unsafe { &mut *self.0.as_ptr() };
        std::mem::swap(&mut node.prev, &mut node.next);
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Releases the node's allocation, returning the node by value.
    ///
    /// # Safety
    /// The node must already be unlinked from its list (or the list must be discarding every
    /// node), and no other NodeRef to it may be used afterwards.
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
    pub prev: Link<T>,
    pub next: Link<T>,
}
