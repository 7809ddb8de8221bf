#![cfg(test)]

use super::*;
use crate::collections::traits::IndexedList;

fn collect<L: IndexedList<i32>>(list: &L) -> Vec<i32> {
    let mut values = Vec::new();
    list.traverse(&mut |value| values.push(*value));
    values
}

fn check_list_contract<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    assert!(list.is_empty());
    assert_eq!(list.pop_back(), None, "Popping an empty list should be a no-op.");
    assert_eq!(list.pop_front(), None, "Shifting an empty list should be a no-op.");
    assert_eq!(list.get(0), None);

    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    assert_eq!(list.get(1), Some(&2));

    list.push_front(0);
    assert_eq!(collect(&list), [0, 1, 2, 3]);

    assert_eq!(list.set(2, 20), Some(()));
    assert_eq!(list.set(4, 40), None, "Setting at the length should be rejected.");

    assert_eq!(list.insert(4, 4), Some(()), "Inserting at the length should be allowed.");
    assert_eq!(list.insert(6, 6), None);
    assert_eq!(
        list.try_insert(6, 6),
        Err(IndexOutOfBounds { index: 6, len: 5 })
    );
    assert_eq!(collect(&list), [0, 1, 20, 3, 4]);

    assert_eq!(list.remove(2), Some(20));
    assert_eq!(list.remove(4), None);
    assert_eq!(list.len(), 4);

    list.reverse();
    assert_eq!(collect(&list), [4, 3, 1, 0]);
    assert_eq!(list.pop_back(), Some(0));
    assert_eq!(list.pop_front(), Some(4));
    assert_eq!(collect(&list), [3, 1]);
}

#[test]
fn test_singly_linked_list_contract() {
    check_list_contract::<SinglyLinkedList<i32>>();
}

#[test]
fn test_doubly_linked_list_contract() {
    check_list_contract::<DoublyLinkedList<i32>>();
}

#[test]
fn test_lists_agree() {
    let mut singly = SinglyLinkedList::from_iter(0..20);
    let mut doubly = DoublyLinkedList::from_iter(0..20);

    for (index, value) in [(3, 100), (0, 101), (22, 102), (10, 103)] {
        assert_eq!(singly.insert(index, value).is_some(), doubly.insert(index, value).is_some());
    }
    for index in [0, 5, 19, 40, 7] {
        assert_eq!(singly.remove(index), doubly.remove(index));
    }
    singly.reverse();
    doubly.reverse();

    assert!(singly.iter().eq(doubly.iter()), "Both lists should hold the same elements.");
}
