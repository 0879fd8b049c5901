//! Indexed binary min-heap used as Dijkstra's open set.
//!
//! Entries are dense node ids keyed by a `u32` tentative distance. A
//! position table maps every queued id to its slot in the heap array, so
//! [`decrease_key`](IndexedMinHeap::decrease_key) finds its entry in O(1)
//! instead of scanning.

const NOT_QUEUED: usize = usize::MAX;

/// A binary min-heap over node ids with O(1) membership and key lookup.
///
/// Heap invariant: every entry's key is `<=` the keys of both its children.
/// It is restored before every method returns.
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    /// Node ids in heap order.
    heap: Vec<usize>,
    /// Key of each id, valid while the id is queued.
    keys: Vec<u32>,
    /// Heap slot of each id, or `NOT_QUEUED`.
    pos: Vec<usize>,
}

impl IndexedMinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with lookup tables sized for ids `0..ids`.
    pub fn with_capacity(ids: usize) -> Self {
        Self {
            heap: Vec::with_capacity(ids),
            keys: vec![0; ids],
            pos: vec![NOT_QUEUED; ids],
        }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entry is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `id` is currently queued.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.pos.get(id).is_some_and(|&p| p != NOT_QUEUED)
    }

    /// The key of a queued id.
    pub fn key(&self, id: usize) -> Option<u32> {
        self.contains(id).then(|| self.keys[id])
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<(usize, u32)> {
        self.heap.first().map(|&id| (id, self.keys[id]))
    }

    /// Queue `id` with priority `key`.
    ///
    /// If `id` is already queued its key is replaced and the entry is moved
    /// to its new place.
    pub fn insert(&mut self, id: usize, key: u32) {
        if self.contains(id) {
            let old = self.keys[id];
            self.keys[id] = key;
            let i = self.pos[id];
            if key < old {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
            return;
        }
        if id >= self.pos.len() {
            self.pos.resize(id + 1, NOT_QUEUED);
            self.keys.resize(id + 1, 0);
        }
        self.keys[id] = key;
        self.pos[id] = self.heap.len();
        self.heap.push(id);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest key.
    pub fn extract_min(&mut self) -> Option<(usize, u32)> {
        if self.heap.is_empty() {
            return None;
        }
        // The last leaf takes the root's place.
        let min = self.heap.swap_remove(0);
        self.pos[min] = NOT_QUEUED;
        if let Some(&root) = self.heap.first() {
            self.pos[root] = 0;
            self.sift_down(0);
        }
        Some((min, self.keys[min]))
    }

    /// Lower the key of a queued id and restore heap order.
    ///
    /// Returns `false`, leaving the heap untouched, if `id` is not queued or
    /// `key` is larger than its current key.
    pub fn decrease_key(&mut self, id: usize, key: u32) -> bool {
        if !self.contains(id) || key > self.keys[id] {
            return false;
        }
        self.keys[id] = key;
        self.sift_up(self.pos[id]);
        true
    }

    /// Remove every entry. Lookup tables keep their capacity.
    pub fn clear(&mut self) {
        for &id in &self.heap {
            self.pos[id] = NOT_QUEUED;
        }
        self.heap.clear();
    }

    // -----------------------------------------------------------------------
    // Sifting
    // -----------------------------------------------------------------------

    #[inline]
    fn key_at(&self, i: usize) -> u32 {
        self.keys[self.heap[i]]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = a;
        self.pos[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.key_at(i) >= self.key_at(parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Equal children: keep the left one.
            let child = if right < len && self.key_at(right) < self.key_at(left) {
                right
            } else {
                left
            };
            if self.key_at(child) >= self.key_at(i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    fn holds_invariant(&self) -> bool {
        (1..self.heap.len()).all(|i| self.key_at((i - 1) / 2) <= self.key_at(i))
            && self.heap.iter().enumerate().all(|(i, &id)| self.pos[id] == i)
    }
}
