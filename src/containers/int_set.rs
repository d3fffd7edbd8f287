//! Set of small positive integers backed by a bit vector.

use crate::error::{Result, TesseraError};

const WORD_BITS: usize = u64::BITS as usize;

/// Bounded integer set
///
/// Members are drawn from `1..=capacity`. Zero is never a member, so callers
/// that need to store a zero-valued key must map it to another slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedIntSet {
    words: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl BoundedIntSet {
    /// Create an empty set accepting items in `1..=capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
            len: 0,
        }
    }

    fn locate(item: usize) -> (usize, u64) {
        let bit = item - 1;
        (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
    }

    /// Insert an item. Returns whether the set changed.
    pub fn insert(&mut self, item: usize) -> Result<bool> {
        if item == 0 || item > self.capacity {
            return Err(TesseraError::SetItemOutOfRange {
                item,
                capacity: self.capacity,
            });
        }
        let (word, mask) = Self::locate(item);
        if self.words[word] & mask != 0 {
            return Ok(false);
        }
        self.words[word] |= mask;
        self.len += 1;
        Ok(true)
    }

    /// Remove an item. Returns whether the set changed.
    pub fn remove(&mut self, item: usize) -> bool {
        if !self.contains(item) {
            return false;
        }
        let (word, mask) = Self::locate(item);
        self.words[word] &= !mask;
        self.len -= 1;
        true
    }

    pub fn contains(&self, item: usize) -> bool {
        if item == 0 || item > self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(item);
        self.words[word] & mask != 0
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.capacity).filter(move |&item| self.contains(item))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|word| *word = 0);
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = BoundedIntSet::new(10);
        assert!(set.insert(3).unwrap());
        assert!(!set.insert(3).unwrap());
        assert!(set.insert(10).unwrap());
        assert!(set.contains(3));
        assert!(set.contains(10));
        assert_eq!(set.len(), 2);
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_out_of_range_items() {
        let mut set = BoundedIntSet::new(4);
        assert!(matches!(
            set.insert(0),
            Err(TesseraError::SetItemOutOfRange { item: 0, capacity: 4 })
        ));
        assert!(set.insert(5).is_err());
        assert!(!set.contains(0));
        assert!(!set.remove(5));
        assert!(set.is_empty());
    }

    #[test]
    fn test_spans_multiple_words() {
        let mut set = BoundedIntSet::new(130);
        set.insert(1).unwrap();
        set.insert(64).unwrap();
        set.insert(65).unwrap();
        set.insert(130).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 64, 65, 130]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(65));
    }
}
