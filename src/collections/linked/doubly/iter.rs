use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{DoublyLinkedList, ListContents, ListState, NodeRef};

impl<T> ListState<T> {
    /// Detaches the front node from this view of the list, without touching the nodes themselves.
    /// Iterators hold a copy of the list's state and shrink it from both ends.
    fn advance_front(&mut self) -> Option<NodeRef<T>> {
        let Full(ListContents { len, head, .. }) = self else {
            return None;
        };
        let node = *head;

        match (len.checked_sub(1), *node.next()) {
            (Some(new_len), Some(new_head)) => {
                *head = new_head;
                *len = new_len;
            },
            _ => *self = Empty,
        }
        Some(node)
    }

    fn advance_back(&mut self) -> Option<NodeRef<T>> {
        let Full(ListContents { len, tail, .. }) = self else {
            return None;
        };
        let node = *tail;

        match (len.checked_sub(1), *node.prev()) {
            (Some(new_len), Some(new_tail)) => {
                *tail = new_tail;
                *len = new_len;
            },
            _ => *self = Empty,
        }
        Some(node)
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator which pops from whichever end it is asked for.
pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over a [`DoublyLinkedList`], usable from either end.
pub struct Iter<'a, T> {
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.advance_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.advance_back().map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            remaining: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowed iterator over a [`DoublyLinkedList`]. Each node is yielded at most once,
/// because both ends move inwards past it.
pub struct IterMut<'a, T> {
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.advance_front().map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.advance_back().map(|mut node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
