use tracing::trace;

/// Sorts `items` by repeatedly swapping adjacent elements that are out of order.
///
/// After each pass the largest remaining element has bubbled to the end of the unsorted region,
/// so each pass is one element shorter. A pass that makes no swaps means the slice is sorted and
/// ends the sort early, making already sorted input `O(n)`.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    for unsorted_len in (2..=items.len()).rev() {
        let mut swapped = false;
        for index in 0..unsorted_len - 1 {
            if items[index] > items[index + 1] {
                items.swap(index, index + 1);
                swapped = true;
            }
        }

        if !swapped {
            trace!(remaining = unsorted_len, "bubble sort pass made no swaps, stopping early");
            break;
        }
    }
}
