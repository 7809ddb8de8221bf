//! This crate is my collection of the classic data structures and algorithms, written out by hand.
//!
//! # Purpose
//! This is a learning project with no expectation of being used in production. Every structure
//! here has a much better version in [`std`] or on crates.io. Writing them helps me to understand
//! them properly: where the links go, who owns each node and what each operation actually costs.
//!
//! # Contents
//! - [`collections`]: singly and doubly linked lists, a stack, a queue and an unbalanced binary
//!   search tree, along with the [`traits`](collections::traits) they share.
//! - [`algorithms`]: five comparison sorts, linear and binary search and the four standard binary
//!   tree traversals (plus iterative versions of the depth-first ones).
//!
//! Each part can be switched on or off with a cargo feature of the same name, for example
//! `linked`, `stack` or `sorting`. Everything is enabled by default.
//!
//! # Error Handling
//! Operations that can be asked for something that doesn't exist, like indexing past the end of a
//! list, come in two flavours. The plain version returns an [`Option`], for callers who only care
//! whether it worked. The `try_` version returns a [`Result`] with a small error struct
//! implementing [`Error`](std::error::Error), describing what went wrong. Nothing here panics on
//! bad input, except for the [`Index`](std::ops::Index) implementations, which panic with that
//! same error.
//!
//! # Logging
//! The crate reports through [`tracing`] but never installs a subscriber itself. The `log_values`
//! methods on the lists emit one `debug` event per element, while a few algorithms emit `trace`
//! events at interesting points. The demo binary installs `tracing-subscriber`'s formatter,
//! filtered with `RUST_LOG`.
//!
//! # Dependencies
//! `derive_more` removes a lot of repetitive `Display` and `Error` implementations, `tracing` is
//! used for logging as described above. Tests additionally use `proptest` and capture logs with
//! `tracing-subscriber`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
