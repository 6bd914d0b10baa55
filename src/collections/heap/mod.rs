//! A module containing [`Heap`], a comparator-ordered binary max-heap, and its associated types.
//!
//! Other than the errors returned by its fallible operations, the included types are for
//! iteration: [`DrainSorted`] pops elements in ranked order, while [`IntoIter`] and
//! [`Iter`](std::slice::Iter) visit them in storage order.

mod error;
mod heap;
mod iter;

pub use error::*;
pub use heap::*;
pub use iter::*;
