/// A last-in-first-out container with a single access point.
pub trait Lifo<T> {
    fn push(&mut self, value: T);

    /// Removes the most recently pushed element, returning [`None`] when empty.
    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A first-in-first-out container, adding at the rear and removing from the front.
pub trait Fifo<T> {
    fn enqueue(&mut self, value: T);

    /// Removes the oldest element, returning [`None`] when empty.
    fn dequeue(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
