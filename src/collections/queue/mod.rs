//! A first-in-first-out [`Queue`] built on forward links.

mod queue;

pub use queue::*;
pub use crate::collections::forward::Iter;
