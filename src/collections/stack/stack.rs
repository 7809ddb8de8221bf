use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::forward::{self, Iter, Link, Node, NodeRef};
use crate::collections::traits::Lifo;

/// A last-in-first-out stack. The most recently pushed element is the only one that can be
/// inspected or removed.
///
/// Every operation is `O(1)`.
pub struct Stack<T> {
    pub(crate) top: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            top: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements on the stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements on the stack. An alias of [`Stack::len`].
    pub const fn size(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes `value` onto the stack, returning a reference to it.
    pub fn push(&mut self, value: T) -> &mut T {
        let mut node = NodeRef::from_node(Node::new(value, self.top));
        self.top = Some(node);
        self.len += 1;
        node.value_mut()
    }

    /// Removes the top element from the stack and returns it, if the stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        // SAFETY: The top node is unlinked below, before anything else can reach it.
        let node = unsafe { self.top?.take_node() };
        self.top = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Returns a reference to the top element, if it exists.
    pub fn top(&self) -> Option<&T> {
        self.top.map(|node| node.value())
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.top.map(|mut node| node.value_mut())
    }

    /// Removes every element from the stack.
    pub fn clear(&mut self) {
        // SAFETY: The stack gives up its whole chain.
        unsafe { forward::drop_chain(self.top.take()) };
        self.len = 0;
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.top, self.len)
    }
}

impl<T> Lifo<T> for Stack<T> {
    fn push(&mut self, value: T) {
        Stack::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    fn top(&self) -> Option<&T> {
        Stack::top(self)
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // SAFETY: The stack is being discarded along with its whole chain.
        unsafe { forward::drop_chain(self.top.take()) };
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
