//! Last-in-first-out stack with a fixed capacity.

/// Bounded LIFO stack
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Push an item on top. Returns false (and drops nothing) when full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top item
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = BoundedStack::new(3);
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_when_full_is_rejected() {
        let mut stack = BoundedStack::new(2);
        assert!(stack.push('a'));
        assert!(stack.push('b'));
        assert!(stack.is_full());
        assert!(!stack.push('c'));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&'b'));
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(!stack.push(()));
        assert!(stack.is_empty());
    }
}
