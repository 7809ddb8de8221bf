use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// The error returned by [`BinarySearchTree::try_insert`](super::BinarySearchTree::try_insert)
/// when an equal value is already in the tree. The rejected value is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadyPresent<T>(pub T);

impl<T> AlreadyPresent<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Debug> Display for AlreadyPresent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value {:?} is already present in the tree!", self.0)
    }
}

impl<T: Debug> Error for AlreadyPresent<T> {}
