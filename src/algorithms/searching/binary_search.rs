use std::cmp::Ordering;

/// Returns the index of an element equal to `target`, halving the candidate range each step.
///
/// `items` must already be sorted in non-decreasing order. This isn't checked: on unsorted input
/// the result is unspecified (but never a panic). If several elements equal `target`, any one of
/// their indices may be returned.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    // Candidates are low..high.
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
