#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value which records every drop in a shared counter, so tests can verify that a collection
/// releases (or keeps) the values handed to it.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far by this counter and all of its clones.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
