//! Searching a slice for the index of a value.

mod binary_search;
mod linear_search;

pub use binary_search::*;
pub use linear_search::*;
