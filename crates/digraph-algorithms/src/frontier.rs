//! Priority frontier for shortest-path expansion
//!
//! A keyed min-priority queue: a binary heap ordered by `(priority, sequence)`
//! plus a key -> heap slot map, so `add_or_update` can decrease a key in place.
//! `sequence` is assigned on first insertion and never changes, which makes
//! extraction order deterministic when priorities tie.

use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<K, P> {
    key: K,
    priority: P,
    sequence: u64,
}

impl<K, P: Ord> Entry<K, P> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.sequence) < (&other.priority, other.sequence)
    }
}

/// Min-priority queue keyed by `K`.
#[derive(Debug, Clone)]
pub struct MinFrontier<K, P> {
    heap: Vec<Entry<K, P>>,
    positions: FxHashMap<K, usize>,
    next_sequence: u64,
}

impl<K, P> MinFrontier<K, P>
where
    K: Clone + Eq + Hash,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            positions: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(capacity);
        Self {
            heap: Vec::with_capacity(capacity),
            positions,
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of `key`, if queued.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.positions.get(key).map(|&slot| self.heap[slot].priority)
    }

    /// Insert `key` only if it is not already queued. Returns `true` on insertion.
    pub fn insert(&mut self, key: K, priority: P) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        let slot = self.heap.len();
        self.positions.insert(key.clone(), slot);
        self.heap.push(Entry {
            key,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.sift_up(slot);
        true
    }

    /// Insert `key`, or lower its priority if the new one is strictly smaller.
    ///
    /// Equal or larger priorities leave the queue untouched. Returns `true` if
    /// the queue changed.
    pub fn add_or_update(&mut self, key: K, priority: P) -> bool {
        match self.positions.get(&key) {
            None => self.insert(key, priority),
            Some(&slot) => {
                if priority < self.heap[slot].priority {
                    self.heap[slot].priority = priority;
                    self.sift_up(slot);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Smallest entry without removing it.
    pub fn peek_min(&self) -> Option<(&K, P)> {
        self.heap.first().map(|e| (&e.key, e.priority))
    }

    /// Remove and return the entry with the smallest priority.
    pub fn remove_min(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.heap[a].key) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.heap[b].key) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.heap[node].precedes(&self.heap[parent]) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.heap[right].precedes(&self.heap[left]) {
                smaller = right;
            }

            if self.heap[smaller].precedes(&self.heap[node]) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<K, P> Default for MinFrontier<K, P>
where
    K: Clone + Eq + Hash,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
