use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::Deref;
use std::slice;

use super::{DrainSorted, EmptyHeap, IndexOutOfBounds, NotFound, RemoveError};
use crate::util::invariant::Invariant;

/// A [`Heap`] ordered by the element type's own [`Ord`] implementation.
pub type NaturalHeap<T> = Heap<T, fn(&T, &T) -> Ordering>;

/// A binary max-heap, ordered by a comparator supplied at construction rather than by [`Ord`].
///
/// Elements are kept in a single contiguous buffer, interpreted as an implicit binary tree: the
/// children of index `i` live at `2i + 1` and `2i + 2`. For every parent and child, the parent never
/// ranks below the child according to the comparator. A comparator returning [`Ordering::Greater`]
/// means that the left argument outranks the right one, so a min-heap is just a heap with the
/// comparator reversed.
///
/// The comparator must be a consistent total preorder for as long as the heap is used. This isn't
/// checked: an inconsistent comparator won't cause undefined behavior, but the heap will hand back
/// elements in an unspecified order.
///
/// Unlike [`std::collections::BinaryHeap`], any element can be removed by predicate, not just the
/// maximum, and the heap can be rebuilt with [`resift`](Heap::resift) after elements have been
/// changed in place.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Heap.
/// - `k`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `from_items` | `O(n)` |
/// | `push` | `O(log n)`*, `O(n)` |
/// | `push_all` | `O(k log(n+k))` |
/// | `pop` | `O(log n)` |
/// | `remove` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `resift` | `O(n)` |
/// | `clear` | `O(n)`** |
///
/// \* If the Heap doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** Only to drop the elements, the storage itself is kept.
pub struct Heap<T, F: Fn(&T, &T) -> Ordering> {
    pub(crate) storage: Vec<T>,
    pub(crate) cmp: F,
}

impl<T, F: Fn(&T, &T) -> Ordering> Heap<T, F> {
    /// Creates an empty Heap ordered by `cmp`. Memory will be allocated on the first push.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let heap = Heap::new(|a: &u8, b: &u8| a.cmp(b));
    /// assert!(heap.is_empty());
    /// ```
    pub const fn new(cmp: F) -> Heap<T, F> {
        Heap {
            storage: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty Heap ordered by `cmp`, with room for `cap` elements before reallocating.
    pub fn with_cap(cmp: F, cap: usize) -> Heap<T, F> {
        Heap {
            storage: Vec::with_capacity(cap),
            cmp,
        }
    }

    /// Creates a Heap ordered by `cmp` holding all of `items`.
    ///
    /// The items are moved in as given and then arranged bottom-up, which takes linear time rather
    /// than the `O(n log n)` of pushing them one by one.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let heap = Heap::from_items(|a: &u8, b: &u8| a.cmp(b), [1, 2, 3]);
    /// assert_eq!(heap.inspect(), &[3, 2, 1]);
    /// ```
    pub fn from_items<I: IntoIterator<Item = T>>(cmp: F, items: I) -> Heap<T, F> {
        let mut heap = Heap {
            storage: items.into_iter().collect(),
            cmp,
        };
        // A single element is already a valid heap.
        if heap.len() > 1 {
            heap.heapify();
        }
        heap
    }

    /// Returns the number of elements in the Heap.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the Heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the elements of the Heap in storage order, which is the level order of the implicit
    /// tree. Only the first element has a defined position: it is the maximum.
    ///
    /// The slice borrows the Heap's own elements. Cloning it with `to_vec` gives an independent
    /// copy, although values with interior mutability stay shared with the Heap.
    pub fn inspect(&self) -> &[T] {
        &self.storage
    }

    /// Returns a reference to the maximum element, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there are no elements.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::{EmptyHeap, Heap};
    /// let mut heap = Heap::new(|a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.peek(), Err(EmptyHeap));
    /// heap.push(4).push(9).push(1);
    /// assert_eq!(heap.peek(), Ok(&9));
    /// ```
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.storage.first().ok_or(EmptyHeap)
    }

    /// Adds `item` to the Heap, moving it up until its parent doesn't rank below it. Returns the
    /// Heap to allow chaining.
    ///
    /// # Panics
    /// Panics if the new capacity would exceed [`isize::MAX`] bytes.
    pub fn push(&mut self, item: T) -> &mut Heap<T, F> {
        self.storage.push(item);
        self.sift_up(self.storage.len() - 1).invariant();
        self
    }

    /// Pushes every element of `items`, in iteration order. Each element sees the heap as left by
    /// the ones before it.
    ///
    /// # Panics
    /// Panics if the new capacity would exceed [`isize::MAX`] bytes.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Heap<T, F> {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Removes and returns the maximum element.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there are no elements.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let mut heap = Heap::from_items(|a: &i32, b: &i32| a.cmp(b), [5, 8, 2]);
    /// assert_eq!(heap.pop(), Ok(8));
    /// assert_eq!(heap.pop(), Ok(5));
    /// assert_eq!(heap.pop(), Ok(2));
    /// assert!(heap.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        if self.storage.is_empty() {
            return Err(EmptyHeap);
        }

        let max = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.sift_down(0).invariant();
        }
        Ok(max)
    }

    /// Removes and returns the first element, in storage order, that satisfies `predicate`. This
    /// isn't necessarily the highest ranked match.
    ///
    /// The predicate is given each element along with the Heap itself, so it can compare against
    /// the current state of the Heap while it is borrowed by this call.
    ///
    /// # Errors
    /// Returns [`RemoveError::Empty`] if there are no elements, or [`RemoveError::NotFound`] if
    /// none of them match.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let mut heap = Heap::from_items(|a: &i32, b: &i32| a.cmp(b), [1, 2, 3]);
    /// assert_eq!(heap.remove(|n, _| *n == 2), Ok(2));
    /// assert_eq!(heap.inspect(), &[3, 1]);
    /// assert!(heap.remove(|n, _| *n == 2).is_err_and(|e| e.is_not_found()));
    /// // Take out whatever is currently at the top.
    /// assert_eq!(heap.remove(|n, heap| heap.peek() == Ok(n)), Ok(3));
    /// ```
    pub fn remove<P>(&mut self, mut predicate: P) -> Result<T, RemoveError>
    where
        P: FnMut(&T, &Heap<T, F>) -> bool,
    {
        if self.storage.is_empty() {
            return Err(EmptyHeap.into());
        }

        let heap: &Heap<T, F> = self;
        let index = heap
            .storage
            .iter()
            .position(|item| predicate(item, heap))
            .ok_or(NotFound)?;
        Ok(self.delete(index).invariant())
    }

    /// Removes every element that satisfies `predicate`, returning them in storage order. Finding
    /// no matches isn't an error, the returned list is just empty.
    ///
    /// The predicate is called exactly once per element, with the Heap as it was before the call,
    /// and before anything is moved. Unmatched elements are then compacted in place and the Heap is
    /// rebuilt bottom-up, so the storage order left behind generally differs from the one a series
    /// of [`remove`](Heap::remove) calls would leave. Don't rely on [`inspect`](Heap::inspect)
    /// order afterwards, beyond the maximum coming first.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there are no elements.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let mut heap = Heap::from_items(|a: &i32, b: &i32| a.cmp(b), [1, 2, 3]);
    /// assert_eq!(heap.remove_all(|n, _| *n < 3), Ok(vec![2, 1]));
    /// assert_eq!(heap.remove_all(|n, _| *n < 3), Ok(vec![]));
    /// assert_eq!(heap.inspect(), &[3]);
    /// ```
    pub fn remove_all<P>(&mut self, mut predicate: P) -> Result<Vec<T>, EmptyHeap>
    where
        P: FnMut(&T, &Heap<T, F>) -> bool,
    {
        if self.storage.is_empty() {
            return Err(EmptyHeap);
        }

        let heap: &Heap<T, F> = self;
        let matches: Vec<bool> = heap.storage.iter().map(|item| predicate(item, heap)).collect();
        let found = matches.iter().filter(|matched| **matched).count();
        if found == 0 {
            return Ok(Vec::new());
        }

        let mut removed = Vec::with_capacity(found);
        let items = mem::replace(&mut self.storage, Vec::with_capacity(matches.len() - found));
        for (item, matched) in items.into_iter().zip(matches) {
            if matched {
                removed.push(item);
            } else {
                self.storage.push(item);
            }
        }

        self.heapify();
        Ok(removed)
    }

    /// Rebuilds the Heap from its current contents. This is needed after the rank of any element
    /// has been changed in place, through [`iter_mut`](Heap::iter_mut) or interior mutability. On
    /// a Heap that is already valid, nothing moves.
    pub fn resift(&mut self) -> &mut Heap<T, F> {
        self.heapify();
        self
    }

    /// Drops all elements, keeping the allocated capacity.
    pub fn clear(&mut self) -> &mut Heap<T, F> {
        self.storage.clear();
        self
    }

    /// Returns a mutable iterator over the elements in storage order.
    ///
    /// It is a logic error to change the rank of an element through this iterator without calling
    /// [`resift`](Heap::resift) afterwards.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::Heap;
    /// let mut heap = Heap::from_items(|a: &i32, b: &i32| a.cmp(b), [1, 2, 3]);
    /// heap.iter_mut().for_each(|n| *n = -*n);
    /// heap.resift();
    /// assert_eq!(heap.peek(), Ok(&-1));
    /// ```
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Consumes the Heap, returning its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Consumes the Heap, returning its elements from the highest rank to the lowest.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns an iterator which pops elements off of the Heap, from the highest rank to the
    /// lowest. The Heap is empty once the iterator is dropped, whether or not it was exhausted.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, F> {
        DrainSorted { heap: self }
    }

    /// Arranges the whole storage into a valid heap, by sifting down every internal node from the
    /// last to the root.
    pub(crate) fn heapify(&mut self) {
        for index in (0..self.storage.len() / 2).rev() {
            self.sift_down(index).invariant();
        }
    }

    /// Removes the element at `index`, filling the gap with the last element and moving that up
    /// or down depending on how it ranks against the removed one.
    pub(crate) fn delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.storage.len())?;

        let found = self.storage.swap_remove(index);
        // Nothing moved if the last element was the one removed.
        if index < self.storage.len() {
            match (self.cmp)(&self.storage[index], &found) {
                Ordering::Greater => self.sift_up(index)?,
                Ordering::Less => self.sift_down(index)?,
                Ordering::Equal => (),
            }
        }
        Ok(found)
    }

    pub(crate) fn sift_up(&mut self, mut index: usize) -> Result<(), IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.storage.len())?;

        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.outranks(index, parent) {
                break;
            }
            self.storage.swap(parent, index);
            index = parent;
        }
        Ok(())
    }

    pub(crate) fn sift_down(&mut self, mut index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.storage.len();
        IndexOutOfBounds::check(index, len)?;

        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            let mut largest = index;
            if left < len && self.outranks(left, largest) {
                largest = left;
            }
            if right < len && self.outranks(right, largest) {
                largest = right;
            }

            if largest == index {
                return Ok(());
            }
            self.storage.swap(index, largest);
            index = largest;
        }
    }

    fn outranks(&self, index: usize, other: usize) -> bool {
        (self.cmp)(&self.storage[index], &self.storage[other]) == Ordering::Greater
    }
}

impl<T: Ord> NaturalHeap<T> {
    /// Creates an empty Heap ordered by [`Ord::cmp`], so the greatest element comes out first.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::heap::NaturalHeap;
    /// let mut heap = NaturalHeap::natural();
    /// heap.push_all(["b", "c", "a"]);
    /// assert_eq!(heap.into_sorted_vec(), ["c", "b", "a"]);
    /// ```
    pub fn natural() -> NaturalHeap<T> {
        Heap::new(<T as Ord>::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T: Ord> Default for NaturalHeap<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> Deref for Heap<T, F> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl<T: Clone, F: Fn(&T, &T) -> Ordering + Clone> Clone for Heap<T, F> {
    fn clone(&self) -> Self {
        Heap {
            storage: self.storage.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug, F: Fn(&T, &T) -> Ordering> Debug for Heap<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}
