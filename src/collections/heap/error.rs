use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The heap held no elements when the operation needed at least one.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation requires a non-empty heap")]
pub struct EmptyHeap;

/// No element in the heap satisfied the predicate given to [`Heap::remove`](super::Heap::remove).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no element matched the predicate")]
pub struct NotFound;

/// The ways a single-element [`Heap::remove`](super::Heap::remove) can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    Empty(EmptyHeap),
    NotFound(NotFound),
}

/// A position handed to one of the heap's internal sifting or deletion steps was past its last
/// element. The public operations only use positions they have just looked up, so this can only
/// come from a bug in the Heap itself.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("position {index} is outside a heap of {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    pub(crate) const fn check(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index < len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}
