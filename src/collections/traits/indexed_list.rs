use crate::util::error::IndexOutOfBounds;

/// An ordered sequence with positional access, implemented by both linked lists.
///
/// Every positional method signals a bad index with [`None`] (or the [`IndexOutOfBounds`] error in
/// the `try_` forms) rather than panicking.
pub trait IndexedList<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` to the back of the list.
    fn push_back(&mut self, value: T);

    /// Prepends `value` to the front of the list.
    fn push_front(&mut self, value: T);

    fn pop_back(&mut self) -> Option<T>;

    fn pop_front(&mut self) -> Option<T>;

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Overwrites the element at `index`, dropping the previous value.
    fn try_set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    fn set(&mut self, index: usize, value: T) -> Option<()> {
        self.try_set(index, value).ok()
    }

    /// Inserts `value` so that it ends up at `index`, which may be equal to the length.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    fn insert(&mut self, index: usize, value: T) -> Option<()> {
        self.try_insert(index, value).ok()
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index).ok()
    }

    fn reverse(&mut self);

    /// Calls `visit` on every element, front to back.
    fn traverse(&self, visit: &mut dyn FnMut(&T));
}
