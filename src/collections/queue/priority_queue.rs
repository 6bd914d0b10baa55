use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::slice;

use crate::collections::heap::Heap;

/// A queue which always dequeues its highest ranked element first, as decided by a comparator.
///
/// This is a thin layer over [`Heap`], trading the Heap's error types for [`Option`]s the way
/// queues usually report emptiness. Elements of equal rank aren't guaranteed to leave in the order
/// they arrived.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `enqueue` | `O(log n)`*, `O(n)` |
/// | `dequeue` | `O(log n)` |
/// | `remove` | `O(n)` |
///
/// \* If the underlying Heap doesn't have enough capacity for the new element, `enqueue` will take
/// `O(n)`.
pub struct PriorityQueue<T, F: Fn(&T, &T) -> Ordering> {
    pub(crate) heap: Heap<T, F>,
}

impl<T, F: Fn(&T, &T) -> Ordering> PriorityQueue<T, F> {
    /// Creates an empty PriorityQueue ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// # use std_augment::collections::queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// queue.enqueue((1, 'l')).enqueue((9, 'u')).enqueue((5, 'n'));
    /// assert_eq!(queue.dequeue(), Some((9, 'u')));
    /// assert_eq!(queue.dequeue(), Some((5, 'n')));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub const fn new(cmp: F) -> PriorityQueue<T, F> {
        PriorityQueue {
            heap: Heap::new(cmp),
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `item` to the queue. Returns the queue to allow chaining.
    pub fn enqueue(&mut self, item: T) -> &mut PriorityQueue<T, F> {
        self.heap.push(item);
        self
    }

    /// Removes and returns the highest ranked element, if there is one.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    /// Returns a reference to the element that would be dequeued next, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.heap.peek().ok()
    }

    /// Takes the first queued element matching `predicate` out of the queue, regardless of its
    /// rank.
    pub fn remove<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<T> {
        self.heap.remove(|item, _| predicate(item)).ok()
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator over the queued elements, in no particular order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.inspect().iter()
    }

    /// Consumes the queue, returning its elements in the order they would have been dequeued.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Consumes the queue, returning the Heap which backs it.
    pub fn into_heap(self) -> Heap<T, F> {
        self.heap
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> From<Heap<T, F>> for PriorityQueue<T, F> {
    fn from(heap: Heap<T, F>) -> Self {
        PriorityQueue { heap }
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> Extend<T> for PriorityQueue<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T: Debug, F: Fn(&T, &T) -> Ordering> Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("front", &self.front())
            .field("len", &self.len())
            .finish()
    }
}
