//! Fixed-capacity FIFO used for the trail and flux windows
//!
//! Items are addressed oldest-to-newest by count: `get(0)` is the oldest
//! sample still held, `get(len - 1)` the newest. Once full, every `push`
//! overwrites the oldest slot in place.

#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: Vec<T>,   // storage, grows up to `capacity` then wraps
    start: usize,    // slot holding the oldest item once wrapped
    capacity: usize, // maximum number of items held
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` items.
    /// Storage grows with the pushes, not up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            start: 0,
            capacity,
        }
    }

    /// Append `item` as the newest entry
    /// Returns the evicted oldest item when the buffer was already full
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        if self.items.len() < self.capacity {
            self.items.push(item);
            return None;
        }
        let old = std::mem::replace(&mut self.items[self.start], item);
        self.start = (self.start + 1) % self.capacity;
        Some(old)
    }

    /// Item `i` counted from the oldest
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.items.len() {
            return None;
        }
        self.items.get((self.start + i) % self.items.len())
    }

    /// Newest item
    pub fn latest(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Oldest-to-newest iterator
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.items.len()).filter_map(move |i| self.get(i))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `false` while the window is still warming up
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.start = 0;
    }

    /// Change the capacity, dropping the oldest items if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.items.rotate_left(self.start);
        self.start = 0;
        if self.items.len() > capacity {
            let excess = self.items.len() - capacity;
            self.items.drain(..excess);
        }
        self.capacity = capacity;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Contiguous oldest-to-newest copy
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    /// Buffer sized exactly to the collected items
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let capacity = items.len();
        Self {
            items,
            start: 0,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RingBuffer;

    #[test]
    fn evicts_oldest_once_full() {
        let mut ring = RingBuffer::with_capacity(3);
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert!(ring.is_full());

        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.push(5), Some(2));
        assert_eq!(ring.to_vec(), vec![3, 4, 5]);
        assert_eq!(ring.get(0), Some(&3));
        assert_eq!(ring.latest(), Some(&5));
        assert_eq!(ring.get(3), None);
    }

    #[test]
    fn shrinking_keeps_newest() {
        let mut ring = RingBuffer::with_capacity(4);
        for i in 0..6 {
            ring.push(i);
        }
        // wrapped: holds 2, 3, 4, 5
        ring.set_capacity(2);
        assert_eq!(ring.to_vec(), vec![4, 5]);
        assert_eq!(ring.push(6), Some(4));
        assert_eq!(ring.to_vec(), vec![5, 6]);
    }

    #[test]
    fn growing_keeps_everything() {
        let mut ring = RingBuffer::with_capacity(2);
        for i in 0..5 {
            ring.push(i);
        }
        ring.set_capacity(4);
        assert!(!ring.is_full());
        ring.push(5);
        assert_eq!(ring.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn huge_capacity_is_not_preallocated() {
        let mut ring = RingBuffer::with_capacity(usize::MAX);
        assert_eq!(ring.push(1u8), None);
        assert_eq!(ring.len(), 1);
        assert!(!ring.is_full());
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut ring = RingBuffer::with_capacity(0);
        assert_eq!(ring.push(7), Some(7));
        assert!(ring.is_empty());
        assert_eq!(ring.latest(), None);
    }
}
