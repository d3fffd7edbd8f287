//! First-in-first-out queue with a fixed capacity.

use std::collections::VecDeque;

/// Bounded FIFO queue
///
/// `append` adds at the tail, `serve` removes from the head.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append at the tail. Returns false when the queue is full.
    pub fn append(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Remove and return the head
    pub fn serve(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the head
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Iterate from head (oldest) to tail (newest)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Reverse the queue in place: the head becomes the tail
    pub fn reverse(&mut self) {
        self.items.make_contiguous().reverse();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
