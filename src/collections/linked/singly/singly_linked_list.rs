use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::{Iter, IterMut};
use crate::collections::forward::{self, Link, Node, NodeRef};
use crate::collections::traits::IndexedList;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in only one direction: every node owns the node after it.
///
/// The list also keeps a handle to its last node so that appending doesn't need to walk the
/// list. Removing the last node still does, because there is no way back from the tail.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get/set` | `O(i)` |
/// | `insert/remove` | `O(i)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| node.value())
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|mut node| node.value_mut())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| node.value())
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|mut node| node.value_mut())
    }

    /// Adds the provided element to the back of the list, returning a reference to it in its new
    /// position.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let mut node = NodeRef::from_node(Node::new(value, None));
        match self.tail {
            Some(tail) => *tail.next_mut() = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
        node.value_mut()
    }

    /// Adds the provided element to the front of the list, returning a reference to it in its new
    /// position.
    pub fn push_front(&mut self, value: T) -> &mut T {
        let mut node = NodeRef::from_node(Node::new(value, self.head));

        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        node.value_mut()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: The head is unlinked below, before anything else can reach it.
        let node = unsafe { self.head?.take_node() };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// This has to walk the list to find the node before the tail.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }

        let before = self.seek(self.len - 2)?;
        let last = (*before.next())?;
        *before.next_mut() = None;

        // SAFETY: The old tail was unlinked from its predecessor above.
        let node = unsafe { last.take_node() };
        self.tail = Some(before);
        self.len -= 1;
        Some(node.value)
    }

    /// Returns a reference to the element at the provided `index`, or [`None`] if it is out of
    /// bounds.
    ///
    /// The [`Index`] operator provides a panicking version of this method.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, or [`None`] if it is
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Overwrites the element at `index` with `value`, returning a reference to the updated
    /// element, or [`None`] if `index` is out of bounds. The previous value is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Option<&mut T> {
        self.try_set(index, value).ok()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let slot = self.try_get_mut(index)?;
        *slot = value;
        Ok(slot)
    }

    /// Inserts `value` so that it ends up at `index`, shifting everything after it back by one.
    /// Valid indices are `0..=len`, anything else returns [`None`] and drops `value`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<&mut T> {
        self.try_insert(index, value).ok()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds { index, len: self.len };
        match index {
            0 => Ok(self.push_front(value)),
            val if val == self.len => Ok(self.push_back(value)),
            val if val > self.len => Err(out_of_bounds),
            val => {
                // 0 < index < len, so the new node lands between two existing ones.
                let prev = self.seek(val - 1).ok_or(out_of_bounds)?;

                let mut node = NodeRef::from_node(Node::new(value, *prev.next()));
                *prev.next_mut() = Some(node);
                self.len += 1;
                Ok(node.value_mut())
            },
        }
    }

    /// Removes and returns the element at `index`, or [`None`] if it is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index).ok()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds { index, len: self.len };
        match index {
            val if val >= self.len => Err(out_of_bounds),
            0 => self.pop_front().ok_or(out_of_bounds),
            val if val == self.len - 1 => self.pop_back().ok_or(out_of_bounds),
            val => {
                let prev = self.seek(val - 1).ok_or(out_of_bounds)?;
                let target = (*prev.next()).ok_or(out_of_bounds)?;

                // SAFETY: The target is unlinked by pointing its predecessor past it.
                let node = unsafe { target.take_node() };
                *prev.next_mut() = node.next;
                self.len -= 1;
                Ok(node.value)
            },
        }
    }

    /// Reverses the direction of every link in place, so that the head becomes the tail and vice
    /// versa.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut remaining = self.head;
        while let Some(node) = remaining {
            remaining = *node.next();
            *node.next_mut() = reversed;
            reversed = Some(node);
        }

        self.tail = self.head;
        self.head = reversed;
    }

    /// Calls `visit` on every element, front to back.
    pub fn traverse(&self, mut visit: impl FnMut(&T)) {
        for value in self.iter() {
            visit(value);
        }
    }

    /// Emits a `debug` event for every element, front to back.
    pub fn log_values(&self)
    where
        T: Debug,
    {
        for (index, value) in self.iter().enumerate() {
            debug!(index, value = ?value, "singly linked list element");
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        // SAFETY: The list gives up its whole chain, and tail is cleared with it.
        unsafe { forward::drop_chain(self.head.take()) };
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Finds the node at `index` by walking forward from the head.
    pub(crate) fn seek(&self, index: usize) -> Option<NodeRef<T>> {
        if index >= self.len {
            return None;
        }
        self.head?.seek(index)
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        self.seek(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Checks that the stored length and tail agree with the chain reachable from head.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut last = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            count += 1;
            last = Some(node);
            curr = *node.next();
        }
        assert_eq!(count, self.len, "Stored length should match the reachable node count.");
        assert!(last == self.tail, "Tail should point at the last reachable node.");
    }
}

impl<T> IndexedList<T> for SinglyLinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push_back(&mut self, value: T) {
        SinglyLinkedList::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        SinglyLinkedList::push_front(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        SinglyLinkedList::pop_back(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        SinglyLinkedList::pop_front(self)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        SinglyLinkedList::try_get(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        SinglyLinkedList::try_set(self, index, value).map(|_| ())
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        SinglyLinkedList::try_insert(self, index, value).map(|_| ())
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_remove(self, index)
    }

    fn reverse(&mut self) {
        SinglyLinkedList::reverse(self);
    }

    fn traverse(&self, visit: &mut dyn FnMut(&T)) {
        SinglyLinkedList::traverse(self, visit);
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // SAFETY: The list is being discarded along with its whole chain.
        unsafe { forward::drop_chain(self.head.take()) };
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugContents(self))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugContents<'a, T>(&'a SinglyLinkedList<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
