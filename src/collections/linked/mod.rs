//! Linked list types: [`SinglyLinkedList`], which only links forwards, and [`DoublyLinkedList`],
//! which links in both directions.
//!
//! Both lists implement [`IndexedList`](super::traits::IndexedList) and share its contract.
//! Positional methods signal bad indices with [`None`], with `try_` variants that explain the
//! failure as an [`IndexOutOfBounds`].

pub mod doubly;
pub mod singly;

mod tests;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
