//! Linear and tree-shaped collection types.
//!
//! # Purpose
//! These are textbook versions of each structure, written to show how the links between nodes
//! are owned and maintained rather than to compete with [`std::collections`].
//!
//! # Method
//! List nodes are leaked out of a [`Box`] when they are created and handled through small copyable
//! `NodeRef` handles until the owning container takes them back. That way a container can hold a
//! handle to both ends of a chain without either handle being invalidated by the other. Each node
//! is released exactly once, by whichever operation unlinks it. Tree nodes simply own their
//! children through [`Box`].

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
pub mod traits;

#[cfg(any(feature = "linked", feature = "queue", feature = "stack"))]
pub(crate) mod forward;
