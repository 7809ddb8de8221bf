/// Returns a sorted copy of `items`, splitting it in half, sorting each half recursively and
/// merging the two sorted halves.
///
/// The input is left untouched and every level of recursion allocates its own intermediate
/// vectors. Recursion depth is `log2(n)`.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

/// Merges two sorted vectors into one, taking from `left` on ties to keep the sort stable.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
