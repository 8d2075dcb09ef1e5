//! Binary-heap min-priority queue with first-in-first-out ties.
//!
//! `BinaryHeap` is a max-heap and makes no promise about the order of equal
//! keys. Each entry therefore carries an insertion sequence number and the
//! ordering is reversed, so `pop_min` yields the smallest key and, among equal
//! keys, the entry pushed first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    key: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue keyed by `f64`.
#[derive(Debug)]
pub(crate) struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_sequence: u64,
}

impl<T> MinQueue<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub(crate) fn push(&mut self, key: f64, item: T) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.heap.push(Entry {
            key,
            sequence,
            item,
        });
    }

    pub(crate) fn pop_min(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|entry| (entry.key, entry.item))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MinQueue;

    #[test]
    fn pops_in_ascending_key_order() {
        let mut queue = MinQueue::with_capacity(4);
        for (key, item) in [(3.0, 'c'), (1.0, 'a'), (2.0, 'b'), (0.5, 'z')] {
            queue.push(key, item);
        }
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_min()).collect();
        assert_eq!(order, vec![(0.5, 'z'), (1.0, 'a'), (2.0, 'b'), (3.0, 'c')]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_keys_pop_first_in_first_out() {
        let mut queue = MinQueue::with_capacity(8);
        for item in 0..6 {
            queue.push(1.0, item);
        }
        queue.push(0.0, 100);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_min())
            .map(|(_, item)| item)
            .collect();
        assert_eq!(order, vec![100, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_queue_pops_nothing() {
        let mut queue: MinQueue<u8> = MinQueue::with_capacity(0);
        assert!(queue.pop_min().is_none());
    }
}
