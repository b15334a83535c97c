//! Indexed binary min-heap with decrease-key.
//!
//! Entries are keyed by node index (the grid arena offset), so membership and
//! priority updates are identity-based and O(1) to locate. Ties between equal
//! priorities are resolved by heap structure and are not stable.

use crate::error::SearchError;

/// Marker for "not in the heap" in the position table.
const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    idx: usize,
    priority: f64,
}

/// A min-priority queue over node indices.
#[derive(Debug, Clone, Default)]
pub struct IndexedQueue {
    heap: Vec<Entry>,
    /// Heap position of each node index, or [`ABSENT`].
    pos: Vec<usize>,
}

impl IndexedQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue sized for node indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            pos: vec![ABSENT; capacity],
        }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove every entry, keeping allocations.
    pub fn clear(&mut self) {
        for e in self.heap.drain(..) {
            self.pos[e.idx] = ABSENT;
        }
    }

    /// Whether `idx` is queued.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.pos.get(idx).is_some_and(|&p| p != ABSENT)
    }

    /// Current priority of `idx`, if queued.
    pub fn priority(&self, idx: usize) -> Option<f64> {
        match self.pos.get(idx) {
            Some(&p) if p != ABSENT => Some(self.heap[p].priority),
            _ => None,
        }
    }

    /// Queue `idx` at `priority`. Pushing an index that is already queued
    /// updates its priority instead of adding a second entry.
    pub fn push(&mut self, idx: usize, priority: f64) {
        if self.update_priority(idx, priority) {
            return;
        }
        if idx >= self.pos.len() {
            self.pos.resize(idx + 1, ABSENT);
        }
        let at = self.heap.len();
        self.heap.push(Entry { idx, priority });
        self.pos[idx] = at;
        self.sift_up(at);
    }

    /// Remove and return the entry with the smallest priority.
    pub fn pop(&mut self) -> Result<(usize, f64), SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop().ok_or(SearchError::EmptyQueue)?;
        self.pos[top.idx] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((top.idx, top.priority))
    }

    /// Overwrite the priority of a queued `idx` and restore heap order.
    ///
    /// Returns `false` and does nothing when `idx` is not queued; it does
    /// not insert.
    pub fn update_priority(&mut self, idx: usize, priority: f64) -> bool {
        let Some(&at) = self.pos.get(idx) else {
            return false;
        };
        if at == ABSENT {
            return false;
        }
        self.heap[at].priority = priority;
        let at = self.sift_up(at);
        self.sift_down(at);
        true
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].priority < self.heap[b].priority
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].idx] = a;
        self.pos[self.heap[b].idx] = b;
    }

    /// Move the entry at `i` up until its parent is not larger. Returns the
    /// final position.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < n && self.less(right, left) {
                child = right;
            }
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }
}
