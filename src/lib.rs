//! Helpers augmenting the collection primitives of [`std`], centred on a comparator-ordered binary
//! heap.
//!
//! # Purpose
//! [`Heap`](collections::heap::Heap) is a max-heap over any element type, ordered by a comparator
//! that is fixed when the heap is created. It keeps the usual `push`/`pop`/`peek` trio but also
//! lets callers remove elements matching a predicate from anywhere in the heap, and rebuild the
//! heap after its elements have been changed in place.
//! [`PriorityQueue`](collections::queue::PriorityQueue) wraps it with a queue-shaped API.
//!
//! # Error Handling
//! Emptiness and failed lookups are ordinary outcomes for a heap, so they are returned as
//! [`Result`]s rather than panicking. These errors are strongly typed: zero-sized structs
//! implementing [`Error`](std::error::Error), combined into enums for static dispatch where an
//! operation can fail in more than one way.
//!
//! Positional primitives used inside the heap report invalid indices as errors too, but the public
//! operations can only hand them valid indices. If that ever fails to hold, the error is raised as
//! a panic carrying its message, because it is a bug in this crate rather than something the
//! caller could handle.
//!
//! # Features
//! - `heap`: [`collections::heap`].
//! - `queue`: [`collections::queue`], implies `heap`.
//! - `collections-all` (default): all of the above.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error types because they remove the need for
//! some very repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
