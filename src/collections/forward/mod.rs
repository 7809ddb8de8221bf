//! Singly linked building blocks shared by [`SinglyLinkedList`](super::linked::SinglyLinkedList),
//! [`Stack`](super::stack::Stack) and [`Queue`](super::queue::Queue).

mod iter;
mod node;

pub use iter::*;
pub(crate) use node::*;
