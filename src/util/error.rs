use derive_more::{Display, Error};

/// An index was outside of the range a collection accepts for the operation in question.
///
/// For lookups the accepted range is `0..len`, for insertion it is `0..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
