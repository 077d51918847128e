use std::fmt;

use crate::bounded_queue::BoundedQueue;
use crate::error::{CapacityError, Error};

/// An auto-growing FIFO.
///
/// Wraps a [`BoundedQueue`]; when the inner queue rejects an enqueue, every
/// element migrates front-to-back into a ring of double capacity and the
/// rejected element is retried exactly once. FIFO order is preserved across
/// the move. This is the crate's only catch-and-recover path; every other
/// error surfaces directly to the caller.
pub struct Queue<T> {
    inner: BoundedQueue<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with an initial capacity of
    /// [`BoundedQueue::DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            inner: BoundedQueue::new(),
        }
    }

    // --- Inspection ---

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Capacity of the current backing ring. Doubles on overflow, never
    /// shrinks.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    // --- Queue Operations ---

    /// Inserts `element` at the back in amortized O(1), growing as needed.
    pub fn enqueue(&mut self, element: T) {
        match self.inner.enqueue(element) {
            Ok(()) => {}
            Err(CapacityError { element }) => {
                self.grow();
                if self.inner.enqueue(element).is_err() {
                    unreachable!("queue rejected an enqueue right after growing");
                }
            }
        }
    }

    /// Removes and returns the front element in O(1).
    pub fn dequeue(&mut self) -> Result<T, Error> {
        self.inner.dequeue()
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Result<&T, Error> {
        self.inner.front()
    }

    // --- Internal Helpers ---

    // Migrates every element into a ring of double capacity, front to back.
    fn grow(&mut self) {
        let mut next = BoundedQueue::with_capacity(self.inner.capacity() * 2);
        while let Ok(element) = self.inner.dequeue() {
            if next.enqueue(element).is_err() {
                unreachable!("grown queue holds at least the old occupancy");
            }
        }
        self.inner = next;
    }
}

// --- Trait Implementations ---

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// --- Test Suite ---
