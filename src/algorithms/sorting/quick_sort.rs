/// Sorts `items` in place by partitioning around a pivot and recursing into both sides.
///
/// The pivot is always the first element of the range being sorted. On random input this gives
/// `O(n log n)`, but sorted or reverse sorted input makes every partition maximally lopsided:
/// `O(n²)` time and a recursion depth of `n`.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items);
    let (before, after) = items.split_at_mut(pivot);
    quick_sort(before);
    quick_sort(&mut after[1..]);
}

/// Lomuto partition around `items[0]`. Returns the pivot's final index, with every smaller element
/// before it and every other element after it.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let mut boundary = 0;
    for index in 1..items.len() {
        if items[index] < items[0] {
            boundary += 1;
            items.swap(boundary, index);
        }
    }

    items.swap(0, boundary);
    boundary
}
