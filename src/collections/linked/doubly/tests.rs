#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::logging::CapturedLogs;
use crate::util::panic::assert_panics;

#[test]
fn test_successive_pop_back() {
    let mut list = DoublyLinkedList::from_iter(0..5);

    for expected in (0..5).rev() {
        assert_eq!(list.back(), Some(&expected));
        assert_eq!(list.pop_back(), Some(expected));
        list.verify_double_links();
    }

    assert!(list.is_empty(), "Popping every element should leave the list empty.");
    assert!(list.state.is_empty());
    assert_eq!(list.pop_back(), None, "Popping an empty list should do nothing.");

    list.push_back(9);
    list.push_front(8);
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [8, 9]);
}

#[test]
fn test_pop_front() {
    let mut list = DoublyLinkedList::from_iter(['a', 'b', 'c']);

    assert_eq!(list.pop_front(), Some('a'));
    list.verify_double_links();
    assert_eq!(list.front(), Some(&'b'));
    assert_eq!(list.pop_front(), Some('b'));
    assert_eq!(list.pop_front(), Some('c'));
    assert_eq!(list.pop_front(), None);
    list.verify_double_links();
}

#[test]
fn test_get_from_either_end() {
    let list = DoublyLinkedList::from_iter(0..9);

    for index in 0..9 {
        assert_eq!(
            list.get(index),
            Some(&index),
            "Every index should be reachable regardless of which end is closer."
        );
    }
    assert_eq!(list.get(9), None);
    assert_eq!(list.try_get(12), Err(IndexOutOfBounds { index: 12, len: 9 }));

    let list = DoublyLinkedList::from_iter(0..2);
    assert_eq!(list.get(0), Some(&0));
    assert_eq!(list.get(1), Some(&1));
}

#[test]
fn test_set_and_replace() {
    let mut list = DoublyLinkedList::from_iter(0..6);

    assert_eq!(list.set(4, 40), Some(&mut 40));
    assert_eq!(list.set(6, 60), None);
    assert_eq!(list.replace(1, 10), Some(1), "replace should return the previous value.");
    list[0] = 100;

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [100, 10, 2, 3, 40, 5]);
}

#[test]
fn test_insert_splices_both_links() {
    let mut list = DoublyLinkedList::from_iter([0, 2, 4]);

    assert_eq!(list.insert(1, 1), Some(&mut 1));
    list.verify_double_links();
    assert_eq!(list.insert(3, 3), Some(&mut 3));
    list.verify_double_links();
    assert_eq!(list.insert(5, 5), Some(&mut 5), "Inserting at the length should append.");
    assert_eq!(list.insert(0, -1), Some(&mut -1));
    assert_eq!(list.insert(8, 8), None, "Inserting past the length should be rejected.");
    list.verify_double_links();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [-1, 0, 1, 2, 3, 4, 5]);
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        [5, 4, 3, 2, 1, 0, -1],
        "Backward links should agree with forward links after splicing."
    );
}

#[test]
fn test_remove_relinks_neighbours() {
    let mut list = DoublyLinkedList::from_iter(0..6);

    assert_eq!(list.remove(3), Some(3));
    list.verify_double_links();
    assert_eq!(list.remove(1), Some(1));
    list.verify_double_links();
    assert_eq!(list.remove(3), Some(5), "Removing the last index should pop the tail.");
    assert_eq!(list.remove(0), Some(0), "Removing index 0 should pop the head.");
    assert_eq!(list.remove(2), None, "Removing at the length should be rejected.");
    list.verify_double_links();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4]);
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_reverse() {
    let mut list = DoublyLinkedList::from_iter(1..=4);
    list.reverse();
    list.verify_double_links();

    let mut visited = Vec::new();
    list.traverse(|value| visited.push(*value));
    assert_eq!(visited, [4, 3, 2, 1]);

    assert_eq!(list.pop_back(), Some(1), "The old head should now be the tail.");
    list.verify_double_links();

    let mut empty = DoublyLinkedList::<()>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_append() {
    let mut list = DoublyLinkedList::from_iter(0..3);
    list.append(DoublyLinkedList::from_iter(3..5));
    list.verify_double_links();
    assert_eq!(list.len(), 5);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);

    list.append(DoublyLinkedList::new());
    assert_eq!(list.len(), 5, "Appending an empty list should change nothing.");

    let mut empty = DoublyLinkedList::new();
    empty.append(list);
    empty.verify_double_links();
    assert_eq!(empty.len(), 5);
}

#[test]
fn test_index_panics() {
    assert_panics!({
        let list = DoublyLinkedList::from_iter(0..3);
        let _ = list[5];
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(list.remove(5));
    drop(list.pop_back());
    drop(list.pop_front());
    assert_eq!(counter.count(), 3, "Removed elements should be dropped exactly once.");

    let mut other = DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(4));
    other.clear();
    assert_eq!(counter.count(), 7, "Clearing should drop every element.");

    list.append(DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(2)));
    assert_eq!(counter.count(), 7, "Appending should move elements without dropping them.");

    drop(list);
    assert_eq!(counter.count(), 16);
}

#[test]
fn test_iterators() {
    let mut list = DoublyLinkedList::from_iter(0..5);
    for value in list.iter_mut() {
        *value *= 2;
    }

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &4, &6]);

    let mut into_iter = list.clone().into_iter();
    assert_eq!(into_iter.next_back(), Some(8));
    assert_eq!(into_iter.next(), Some(0));
    assert_eq!(into_iter.len(), 3);
}

#[test]
fn test_equality_hash_and_formatting() {
    let list = DoublyLinkedList::from_iter([1, 2, 3]);
    let state = RandomState::new();

    assert_eq!(list, list.clone());
    assert_ne!(list, DoublyLinkedList::from_iter([1, 2]));
    assert_eq!(
        state.hash_one(&list),
        state.hash_one(DoublyLinkedList::from_iter(1..=3)),
        "Equal lists should produce the same hash."
    );
    assert_eq!(format!("{list}"), "(1) <-> (2) <-> (3)");
    assert_eq!(
        format!("{list:?}"),
        "DoublyLinkedList { contents: [1, 2, 3], len: 3 }"
    );
}

#[test]
fn test_log_values() {
    let logs = CapturedLogs::default();
    let list = DoublyLinkedList::from_iter([10, 20, 30]);

    logs.capture(|| list.log_values());

    let contents = logs.contents();
    assert_eq!(contents.matches("doubly linked list element").count(), 3);
    assert!(contents.contains("index=2 value=30"), "Events should carry index and value.");
}
