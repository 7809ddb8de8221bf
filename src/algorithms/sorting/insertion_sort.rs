/// Sorts `items` by growing a sorted prefix one element at a time, shifting every larger element
/// in the prefix one place right to open a gap for the new one.
///
/// Nearly sorted input only shifts a little, so the best case is `O(n)`.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for next in 1..items.len() {
        let mut gap = next;
        while gap > 0 && items[gap - 1] > items[gap] {
            items.swap(gap - 1, gap);
            gap -= 1;
        }
    }
}
