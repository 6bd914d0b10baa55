//! Queue types built on top of the other collections.
//!
//! [`PriorityQueue`] hands elements back by rank instead of insertion order, using a
//! [`Heap`](crate::collections::heap::Heap) for storage.

mod priority_queue;

pub use priority_queue::*;
