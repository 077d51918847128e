use std::fmt;

use crate::error::{CapacityError, Error};

/// A fixed-capacity FIFO over a circular buffer.
///
/// # Behavior
/// * `enqueue` writes at the back index and `dequeue` reads at the front
///   index, both advancing modulo the capacity in O(1).
/// * One slot is deliberately left unused: `enqueue` rejects once occupancy
///   would reach `capacity - 1`, so a queue of capacity `c` holds at most
///   `c - 1` elements. The sentinel slot keeps the full and empty states
///   distinguishable.
pub struct BoundedQueue<T> {
    buf: Box<[Option<T>]>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Capacity used by [`new`](BoundedQueue::new).
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty queue at the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity - 1` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::new();
        buf.resize_with(capacity, || None);
        Self {
            buf: buf.into_boxed_slice(),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    // --- Inspection ---

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count, one more than the usable occupancy.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    // --- Queue Operations ---

    /// Inserts `element` at the back in O(1).
    ///
    /// Rejects with the element when the queue is at its usable ceiling.
    pub fn enqueue(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.len + 1 >= self.capacity() {
            return Err(CapacityError { element });
        }
        self.buf[self.back] = Some(element);
        self.back = (self.back + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element in O(1).
    pub fn dequeue(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let element = match self.buf[self.front].take() {
            Some(element) => element,
            None => unreachable!("front slot of a non-empty queue is occupied"),
        };
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(element)
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        match self.buf[self.front].as_ref() {
            Some(element) => Ok(element),
            None => unreachable!("front slot of a non-empty queue is occupied"),
        }
    }
}

// --- Trait Implementations ---

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len {
            let slot = (self.front + i) % self.capacity();
            if let Some(element) = self.buf[slot].as_ref() {
                list.entry(element);
            }
        }
        list.finish()
    }
}

// --- Test Suite ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_queue_usable_capacity_is_one_less() {
        let mut queue = BoundedQueue::with_capacity(3);
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.enqueue("c"), Err(CapacityError { element: "c" }));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_bounded_queue_fifo_order() {
        let mut queue = BoundedQueue::new();
        for i in 0..10 {
            queue.enqueue(i).unwrap();
        }
        for i in 0..10 {
            assert_eq!(queue.front(), Ok(&i));
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert_eq!(queue.dequeue(), Err(Error::Empty));
        assert_eq!(queue.front(), Err(Error::Empty));
    }

    #[test]
    fn test_bounded_queue_indices_wrap_around() {
        let mut queue = BoundedQueue::with_capacity(5);
        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));
        // The freed slots are reused past the end of the buffer.
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();
        for i in 2..6 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_bounded_queue_rejection_leaves_queue_intact() {
        let mut queue = BoundedQueue::with_capacity(2);
        queue.enqueue(1).unwrap();
        let err = queue.enqueue(2).unwrap_err();
        assert_eq!(err.element, 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Ok(1));
    }

    #[test]
    fn test_bounded_queue_zero_and_one_capacity_always_full() {
        let mut zero: BoundedQueue<i32> = BoundedQueue::with_capacity(0);
        assert_eq!(zero.enqueue(1), Err(CapacityError { element: 1 }));
        assert_eq!(zero.dequeue(), Err(Error::Empty));

        let mut one: BoundedQueue<i32> = BoundedQueue::with_capacity(1);
        assert_eq!(one.enqueue(1), Err(CapacityError { element: 1 }));
        assert_eq!(one.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_bounded_queue_debug_shows_logical_order() {
        let mut queue = BoundedQueue::with_capacity(4);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(format!("{:?}", queue), "[2, 3]");
    }
}
