/// Sorts `items` by repeatedly finding the minimum of the unsorted suffix and swapping it to the
/// front of that suffix. Always `O(n²)` comparisons, but at most `n - 1` swaps.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for start in 0..items.len() {
        let mut min_index = start;
        for candidate in start + 1..items.len() {
            if items[candidate] < items[min_index] {
                min_index = candidate;
            }
        }

        if min_index != start {
            items.swap(start, min_index);
        }
    }
}
