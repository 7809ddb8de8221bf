use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;
use tracing::debug;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
use crate::collections::traits::IndexedList;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
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
/// | `pop_front/back` | `O(1)` |
/// | `get/set` | `O(min(i, n-i))` |
/// | `insert/remove` | `O(min(i, n-i))` |
/// | `reverse` | `O(n)` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// Positional methods walk from whichever end of the list is closer to the target index.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the list, returning a reference to it in its new
    /// position.
    pub fn push_front(&mut self, value: T) -> &mut T {
        let mut node = match &mut self.state {
            Empty => self.fill_single(value),
            Full(contents) => contents.push_front(value),
        };
        node.value_mut()
    }

    /// Adds the provided element to the back of the list, returning a reference to it in its new
    /// position.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let mut node = match &mut self.state {
            Empty => self.fill_single(value),
            Full(contents) => contents.push_back(value),
        };
        node.value_mut()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked below, before anything else can reach it.
                let node = unsafe { head.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// Unlike [`SinglyLinkedList::pop_back`](super::super::SinglyLinkedList::pop_back), this
    /// doesn't walk the list: the tail links back to its predecessor.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked below, before anything else can reach it.
                let node = unsafe { tail.take_node() };

                match (len.checked_sub(1), node.prev) {
                    (Some(new_len), Some(new_tail)) => {
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
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

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure.
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

    /// Replaces the element at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, new_value: T) -> Option<T> {
        Some(mem::replace(self.get_mut(index)?, new_value))
    }

    /// Inserts `value` so that it ends up at `index`, shifting everything after it back by one.
    /// Valid indices are `0..=len`, anything else returns [`None`] and drops `value`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<&mut T> {
        self.try_insert(index, value).ok()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds { index, len: self.len() };
        match index {
            0 => Ok(self.push_front(value)),
            val if val == self.len() => Ok(self.push_back(value)),
            val if val > self.len() => Err(out_of_bounds),
            val => {
                // For this branch, 0 < index < len, so the list is full and there are nodes on
                // both sides of the splice.
                let Full(contents) = &mut self.state else {
                    return Err(out_of_bounds);
                };
                let prev = contents.seek(val - 1).ok_or(out_of_bounds)?;
                let next = (*prev.next()).ok_or(out_of_bounds)?;

                let mut node = NodeRef::from_node(Node {
                    value,
                    prev: Some(prev),
                    next: Some(next),
                });

                *prev.next_mut() = Some(node);
                *next.prev_mut() = Some(node);
                contents.len = contents.len.increment();

                Ok(node.value_mut())
            },
        }
    }

    /// Removes and returns the element at `index`, or [`None`] if it is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index).ok()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        let out_of_bounds = IndexOutOfBounds { index, len };
        match index {
            val if val >= len => Err(out_of_bounds),
            0 => self.pop_front().ok_or(out_of_bounds),
            val if val == len - 1 => self.pop_back().ok_or(out_of_bounds),
            val => {
                let Full(contents) = &mut self.state else {
                    return Err(out_of_bounds);
                };
                let target = contents.seek(val).ok_or(out_of_bounds)?;
                let (Some(prev), Some(next)) = (*target.prev(), *target.next()) else {
                    return Err(out_of_bounds);
                };

                *prev.next_mut() = Some(next);
                *next.prev_mut() = Some(prev);
                // If the length was 1, we would have matched one of the previous branches.
                if let Some(new_len) = contents.len.checked_sub(1) {
                    contents.len = new_len;
                }

                // SAFETY: The node was unlinked from both of its neighbours above, so nothing can
                // reach it anymore.
                let node = unsafe { target.take_node() };
                Ok(node.value)
            },
        }
    }

    /// Reverses the list in place by exchanging every node's links and swapping head and tail.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                curr = *node.next();
                node.swap_links();
            }
            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Moves every element of `other` onto the back of this list without reallocating.
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        let Full(other_contents) = mem::take(&mut other.state) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len.saturating_add(other_contents.len.get());

                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
            },
        }
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
            debug!(index, value = ?value, "doubly linked list element");
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn fill_single(&mut self, value: T) -> NodeRef<T> {
        let contents = ListContents::wrap_one(value);
        let node = contents.head;
        self.state = Full(contents);
        node
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds { index, len: self.len() };
        match &self.state {
            Empty => Err(out_of_bounds),
            Full(contents) => contents.seek(index).ok_or(out_of_bounds),
        }
    }

    /// Walks the list in both directions, checking that every link has a matching link back and
    /// that the stored length matches.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none(), "Head should not link backwards.");
                assert!(tail.next().is_none(), "Tail should not link forwards.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    assert!(
                        *next.prev() == Some(curr),
                        "Every next link should be mirrored by a prev link."
                    );
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "Following next links should end at the tail.");
                assert_eq!(count, len.get(), "Stored length should match the node count.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end is closer.
    pub fn seek(&self, index: usize) -> Option<NodeRef<T>> {
        if index >= self.len.get() {
            None
        } else if index <= self.last_index() / 2 {
            Self::seek_fwd(index, self.head)
        } else {
            Self::seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(count: usize, mut node: NodeRef<T>) -> Option<NodeRef<T>> {
        for _ in 0..count {
            node = (*node.next())?;
        }
        Some(node)
    }

    pub fn seek_bwd(count: usize, mut node: NodeRef<T>) -> Option<NodeRef<T>> {
        for _ in 0..count {
            node = (*node.prev())?;
        }
        Some(node)
    }

    pub fn push_front(&mut self, value: T) -> NodeRef<T> {
        self.len = self.len.increment();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
        node
    }

    pub fn push_back(&mut self, value: T) -> NodeRef<T> {
        self.len = self.len.increment();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        node
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> IndexedList<T> for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    fn push_back(&mut self, value: T) {
        DoublyLinkedList::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        DoublyLinkedList::push_front(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        DoublyLinkedList::pop_back(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        DoublyLinkedList::try_get(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        DoublyLinkedList::try_set(self, index, value).map(|_| ())
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        DoublyLinkedList::try_insert(self, index, value).map(|_| ())
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        DoublyLinkedList::try_remove(self, index)
    }

    fn reverse(&mut self) {
        DoublyLinkedList::reverse(self);
    }

    fn traverse(&self, visit: &mut dyn FnMut(&T)) {
        DoublyLinkedList::traverse(self, visit);
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: The whole list is being discarded and each node is visited once.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugContents<'a, T>(&'a DoublyLinkedList<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
