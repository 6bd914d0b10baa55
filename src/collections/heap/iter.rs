use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::slice;

use super::{Heap, NaturalHeap};
#[doc(inline)]
pub use std::vec::IntoIter;

/// An iterator which pops elements off of a [`Heap`], from the highest rank to the lowest. See
/// [`Heap::drain_sorted`].
pub struct DrainSorted<'a, T, F: Fn(&T, &T) -> Ordering> {
    pub(crate) heap: &'a mut Heap<T, F>,
}

impl<T, F: Fn(&T, &T) -> Ordering> Iterator for DrainSorted<'_, T, F> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> ExactSizeIterator for DrainSorted<'_, T, F> {}

impl<T, F: Fn(&T, &T) -> Ordering> FusedIterator for DrainSorted<'_, T, F> {}

impl<T, F: Fn(&T, &T) -> Ordering> Drop for DrainSorted<'_, T, F> {
    fn drop(&mut self) {
        // The remaining elements don't need ordering to be dropped.
        self.heap.clear();
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> IntoIterator for Heap<T, F> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Creates an owned iterator over the elements in storage order. Use
    /// [`into_sorted_vec`](Heap::into_sorted_vec) for ranked order instead.
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, F: Fn(&T, &T) -> Ordering> IntoIterator for &'a Heap<T, F> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> Extend<T> for Heap<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for NaturalHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_items(<T as Ord>::cmp as fn(&T, &T) -> Ordering, iter)
    }
}
