use classic_lib::algorithms::searching::{binary_search, linear_search};
use classic_lib::algorithms::sorting::{
    bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort, selection_sort,
};
use classic_lib::algorithms::traversal::{bfs, in_order, post_order, pre_order};
use classic_lib::collections::binary_tree::BinarySearchTree;
use classic_lib::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use classic_lib::collections::queue::Queue;
use classic_lib::collections::stack::Stack;
use tracing::info;

fn main() {
    // Run with RUST_LOG=debug to see each list element logged.
    tracing_subscriber::fmt::init();

    println!("\n[SinglyLinkedList]\n");

    let mut singly = SinglyLinkedList::new();
    for value in 1..=3 {
        singly.push_back(value);
    }
    println!("{singly}");
    println!("get(1) = {:?}", singly.get(1));
    singly.reverse();
    println!("reversed: {singly}");
    let removed = singly.remove(0);
    println!("remove(0) = {removed:?}, leaving {singly:?}");
    singly.log_values();

    println!("\n[DoublyLinkedList]\n");

    let mut doubly = DoublyLinkedList::from_iter(['a', 'b', 'c', 'd']);
    println!("{doubly}");
    doubly.insert(2, 'x');
    println!("insert(2, 'x'): {doubly}");
    while let Some(value) = doubly.pop_back() {
        println!("pop_back() = {value:?}, leaving {doubly}");
    }
    doubly.log_values();

    println!("\n[Stack]\n");

    let mut stack = Stack::from_iter(["first", "second", "third"]);
    println!("{stack:?}, top = {:?}", stack.top());
    while let Some(value) = stack.pop() {
        println!("pop() = {value}");
    }

    println!("\n[Queue]\n");

    let mut queue = Queue::from_iter(["first", "second", "third"]);
    println!("{queue:?}, peek = {:?}", queue.peek());
    while let Some(value) = queue.dequeue() {
        println!("dequeue() = {value}");
    }

    println!("\n[BinarySearchTree]\n");

    let mut tree = BinarySearchTree::new();
    for value in [5, 3, 8, 1, 4, 9, 3] {
        match tree.try_insert(value) {
            Ok(_) => info!(value, "inserted into tree"),
            Err(err) => info!(%err, "skipped insert"),
        }
    }
    println!("{tree:?}");
    println!("is_present(&4) = {}", tree.is_present(&4));
    println!("is_present(&7) = {}", tree.is_present(&7));

    println!("\n[Traversals]\n");

    println!("pre_order  = {:?}", pre_order(tree.root()));
    println!("in_order   = {:?}", in_order(tree.root()));
    println!("post_order = {:?}", post_order(tree.root()));
    println!("bfs        = {:?}", bfs(tree.root()));

    println!("\n[Sorting]\n");

    let input = [5, 3, 8, 1, 9, 2, 7];
    let sorts: [(&str, fn(&mut [i32])); 4] = [
        ("bubble_sort", bubble_sort),
        ("insertion_sort", insertion_sort),
        ("selection_sort", selection_sort),
        ("quick_sort", quick_sort),
    ];
    for (name, sort) in sorts {
        let mut items = input;
        sort(&mut items);
        println!("{name:<15}{items:?}");
    }
    let sorted = merge_sort(&input);
    println!("{:<15}{sorted:?}", "merge_sort");

    println!("\n[Searching]\n");

    println!("linear_search(&input, &8) = {:?}", linear_search(&input, &8));
    if is_sorted(&sorted) {
        println!("binary_search(&sorted, &8) = {:?}", binary_search(&sorted, &8));
        println!("binary_search(&sorted, &4) = {:?}", binary_search(&sorted, &4));
    }
}
