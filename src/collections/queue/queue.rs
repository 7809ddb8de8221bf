use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::forward::{self, Iter, Link, Node, NodeRef};
use crate::collections::traits::Fifo;

/// A first-in-first-out queue. Elements join at the rear and leave from the front.
///
/// The queue owns the chain of nodes starting at the front, and also keeps a handle to the rear
/// node so that enqueueing is `O(1)`. Every operation is `O(1)`.
pub struct Queue<T> {
    pub(crate) front: Link<T>,
    pub(crate) rear: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            front: None,
            rear: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the queue. An alias of [`Queue::len`].
    pub const fn size(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` to the rear of the queue, returning a reference to it.
    pub fn enqueue(&mut self, value: T) -> &mut T {
        let mut node = NodeRef::from_node(Node::new(value, None));
        match self.rear {
            Some(rear) => *rear.next_mut() = Some(node),
            None => self.front = Some(node),
        }

        self.rear = Some(node);
        self.len += 1;
        node.value_mut()
    }

    /// Removes the front element and returns it, if the queue isn't empty. Once the last element
    /// leaves, both ends of the queue are cleared.
    pub fn dequeue(&mut self) -> Option<T> {
        // SAFETY: The front node is unlinked below, before anything else can reach it.
        let node = unsafe { self.front?.take_node() };

        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Returns a reference to the front element, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.front.map(|node| node.value())
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.front.map(|mut node| node.value_mut())
    }

    /// Returns a reference to the rear element, if it exists.
    pub fn peek_rear(&self) -> Option<&T> {
        self.rear.map(|node| node.value())
    }

    /// Removes every element from the queue.
    pub fn clear(&mut self) {
        // SAFETY: The queue gives up its whole chain, and rear is cleared with it.
        unsafe { forward::drop_chain(self.front.take()) };
        self.rear = None;
        self.len = 0;
    }

    /// Returns an iterator from the front of the queue to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.front, self.len)
    }
}

impl<T> Fifo<T> for Queue<T> {
    fn enqueue(&mut self, value: T) {
        Queue::enqueue(self, value);
    }

    fn dequeue(&mut self) -> Option<T> {
        Queue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        // SAFETY: The queue is being discarded along with its whole chain.
        unsafe { forward::drop_chain(self.front.take()) };
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
