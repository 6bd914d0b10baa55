#![warn(missing_docs)]

pub mod alloc;
pub mod cmp;
pub mod invariant;
pub mod panic;
