//! Capacity-bounded list kept sorted by key.

/// Sorted sequence of `(key, value)` entries
///
/// Entries with equal keys keep their insertion order.
#[derive(Debug, Clone)]
pub struct SortedList<K, V> {
    entries: Vec<(K, V)>,
    capacity: usize,
}

impl<K: Ord, V> SortedList<K, V> {
    /// Create an empty list holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Insert an entry at its ranked position. Returns false when full.
    pub fn add(&mut self, key: K, value: V) -> bool {
        if self.is_full() {
            return false;
        }
        let position = self.entries.partition_point(|(existing, _)| *existing <= key);
        self.entries.insert(position, (key, value));
        true
    }

    /// Entry at the given rank (0 = smallest key)
    pub fn get(&self, rank: usize) -> Option<(&K, &V)> {
        self.entries.get(rank).map(|(k, v)| (k, v))
    }

    /// Remove the entry at the given rank
    pub fn delete_at_index(&mut self, rank: usize) -> Option<(K, V)> {
        if rank < self.entries.len() {
            Some(self.entries.remove(rank))
        } else {
            None
        }
    }

    /// Rank of the first entry whose key equals `key`
    pub fn index_of(&self, key: &K) -> Option<usize> {
        let position = self.entries.partition_point(|(existing, _)| existing < key);
        match self.entries.get(position) {
            Some((existing, _)) if existing == key => Some(position),
            _ => None,
        }
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate values in ascending key order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
