//! Collection types augmenting the ones in [`std::collections`].
//!
//! # Purpose
//! The standard library's [`BinaryHeap`](std::collections::BinaryHeap) is tied to [`Ord`] and can
//! only give up its maximum. The types here are ordered by a comparator chosen per instance and
//! support removing arbitrary elements.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (but not DerefMut, as
//! that would allow the ordering to be broken without notice), which exposes read-only slice
//! functionality for free.

#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "queue")]
pub mod queue;
