#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::logging::CapturedLogs;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_get() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.get(1), Some(&2), "Pushing 1, 2, 3 should put 2 at index 1.");
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.get(3), None, "Index equal to length should be out of bounds.");
    assert_eq!(
        list.try_get(7),
        Err(IndexOutOfBounds { index: 7, len: 3 }),
        "The error should carry the rejected index and the length."
    );
    list.verify_links();

    *list.push_front(0) += 10;
    assert_eq!(list.front(), Some(&10), "push_front should return a handle to the new value.");
    list.verify_links();
}

#[test]
fn test_push_front_then_back() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_front(0);
    list.verify_links();

    *list.push_back(2) += 20;
    list.verify_links();
    list.push_back(3);
    list.verify_links();

    assert_eq!(list.back(), Some(&3), "Each push_back should move the tail.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 22, 3]);

    let mut list = SinglyLinkedList::new();
    list.push_front('b');
    list.push_back('c');
    list.push_back('d');
    assert_eq!(list.pop_back(), Some('d'));
    list.push_back('e');
    list.verify_links();
    assert_eq!(list.iter().collect::<String>(), "bce");
}

#[test]
fn test_pop_both_ends() {
    let mut list = SinglyLinkedList::from_iter(0..4);

    assert_eq!(list.pop_back(), Some(3));
    list.verify_links();
    assert_eq!(list.back(), Some(&2), "Tail should move back after pop_back.");

    assert_eq!(list.pop_front(), Some(0));
    list.verify_links();
    assert_eq!(list.front(), Some(&1));

    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    list.verify_links();
    assert!(list.is_empty());
    assert_eq!(list.back(), None, "Tail should be cleared once the list is empty.");

    assert_eq!(list.pop_back(), None, "Popping an empty list should do nothing.");
    assert_eq!(list.pop_front(), None);

    list.push_back(5);
    assert_eq!(list.front(), Some(&5), "An emptied list should be reusable.");
    list.verify_links();
}

#[test]
fn test_set() {
    let mut list = SinglyLinkedList::from_iter(['a', 'b', 'c']);

    assert_eq!(list.set(1, 'x'), Some(&mut 'x'));
    assert_eq!(list.set(3, 'y'), None, "Setting past the end should be rejected.");
    assert_eq!(list.iter().collect::<String>(), "axc");

    list[2] = 'z';
    assert_eq!(list[2], 'z');
}

#[test]
fn test_insert() {
    let mut list = SinglyLinkedList::from_iter([1, 3]);

    assert!(list.insert(1, 2).is_some(), "Inserting in the middle should succeed.");
    assert!(list.insert(0, 0).is_some(), "Inserting at the front should succeed.");
    assert!(list.insert(4, 4).is_some(), "Inserting at the length should append.");
    assert!(list.insert(9, 9).is_none(), "Inserting past the length should be rejected.");
    list.verify_links();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(list.back(), Some(&4), "Appending through insert should update the tail.");
}

#[test]
fn test_remove() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);

    assert_eq!(list.remove(0), Some(1));
    assert_eq!(list.len(), 2, "Removing the head should decrement the length.");
    assert_eq!(list.front(), Some(&2), "The former second element should become the head.");
    list.verify_links();

    let mut list = SinglyLinkedList::from_iter(0..5);
    assert_eq!(list.remove(2), Some(2));
    assert_eq!(list.remove(3), Some(4), "Removing the last index should pop the tail.");
    assert_eq!(list.remove(3), None);
    list.verify_links();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 3]);
}

#[test]
fn test_reverse() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    list.reverse();
    list.verify_links();

    let mut visited = Vec::new();
    list.traverse(|value| visited.push(*value));
    assert_eq!(visited, [3, 2, 1], "Traversal after reversing should run backwards.");

    list.push_back(0);
    assert_eq!(list.back(), Some(&0), "The old head should be the new tail.");

    let mut empty = SinglyLinkedList::<u8>::new();
    empty.reverse();
    empty.verify_links();

    let mut single = SinglyLinkedList::from_iter([7]);
    single.reverse();
    single.verify_links();
    assert_eq!(single.front(), single.back());
}

#[test]
fn test_index_panics() {
    assert_panics!({
        let list = SinglyLinkedList::from_iter(0..3);
        let _ = list[3];
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(list.remove(4));
    drop(list.pop_back());
    drop(list.pop_front());
    assert_eq!(counter.count(), 3, "Removed elements should be dropped exactly once.");

    list.set(0, counter.clone());
    assert_eq!(counter.count(), 4, "Overwritten elements should be dropped.");

    drop(list);
    assert_eq!(counter.count(), 11, "All remaining elements should be dropped with the list.");
}

#[test]
fn test_long_list_drop() {
    let list = SinglyLinkedList::from_iter(0..200_000);
    drop(list);
}

#[test]
fn test_iterators_and_formatting() {
    let mut list = SinglyLinkedList::from_iter(1..=3);
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(list.iter().len(), 3);
    assert_eq!(format!("{list}"), "(10) -> (20) -> (30)");
    assert!(list.contains(&20));
    assert_eq!(list.index_of(&30), Some(2));

    let cloned = list.clone();
    assert_eq!(cloned, list, "A cloned list should be equal.");
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_log_values() {
    let logs = CapturedLogs::default();
    let list = SinglyLinkedList::from_iter(["first", "second"]);

    logs.capture(|| list.log_values());

    let contents = logs.contents();
    assert!(contents.contains("index=0"), "Each event should carry its index.");
    assert!(contents.contains("value=\"second\""), "Each event should carry its value.");
}
