/// Returns the index of the first element equal to `target`, checking every element in turn.
/// `O(n)`, and the slice doesn't need any ordering.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}
