//! A last-in-first-out [`Stack`] built on forward links.

mod stack;

pub use stack::*;
pub use crate::collections::forward::Iter;
