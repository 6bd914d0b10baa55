use std::error::Error;

/// Turns the error of an internal step that the caller has already made sure can't fail into a
/// panic, rather than forcing every public operation to return it.
pub(crate) trait Invariant<T> {
    /// Returns the [`Ok`] value.
    ///
    /// # Panics
    /// Panics with the error's message if the [`Result`] is an [`Err`], as that means the heap
    /// broke one of its own invariants.
    fn invariant(self) -> T;
}

impl<T, E: Error> Invariant<T> for Result<T, E> {
    #[track_caller]
    fn invariant(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("heap invariant violated: {error}"),
        }
    }
}
