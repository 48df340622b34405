//! Frontier queues: FIFO for BFS, min-priority for Dijkstra and A*.
//!
//! The priority queue is a min-heap keyed by `(priority, item, seq)`.
//! Equal priorities are popped in item order (x, then y for points), and
//! identical items in insertion order, so every run pops the same sequence.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// First-in first-out frontier.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An entry in the priority frontier.
#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    priority: f64,
    /// Monotonically increasing counter; last-resort tie break.
    seq: u64,
}

impl<T: Ord> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Entry<T> {}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.item.cmp(&other.item))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Minimum-priority frontier with deterministic tie breaking.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T: Ord> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T: Ord> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push `item` with the given priority. Lower priorities pop first.
    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Pop the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
