/// An ordered set that supports insertion and membership tests without duplicates.
pub trait SearchTree<T: Ord> {
    /// Inserts `value`, returning false if an equal value was already present.
    fn insert(&mut self, value: T) -> bool;

    fn is_present(&self, value: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
