/*!
# Indexed Priority Queue

A binary min-heap over `VertexId`s keyed by a priority, with a position table so that the
priority of an enqueued vertex can be decreased in `O(log n)`. Ties between equal priorities
are broken by the smaller `VertexId`, which makes every extraction order deterministic.

```
use adjgraphs::utils::PriorityQueue;

let mut pq = PriorityQueue::from_entries(4, [(0, 9u64), (1, 4), (2, 7), (3, 4)]);
assert!(pq.decrease_key(0, 1));
assert_eq!(pq.pop(), Some((0, 1)));
assert_eq!(pq.pop(), Some((1, 4)));
assert_eq!(pq.pop(), Some((3, 4)));
assert_eq!(pq.pop(), Some((2, 7)));
assert!(pq.is_empty());
```
*/

use crate::VertexId;

#[derive(Debug, Clone)]
pub struct PriorityQueue<P> {
    heap: Vec<(P, VertexId)>,
    positions: Vec<Option<usize>>,
}

impl<P: Ord + Copy> PriorityQueue<P> {
    /// Creates an empty queue accepting ids `0..id_bound`
    pub fn new(id_bound: usize) -> Self {
        Self {
            heap: Vec::new(),
            positions: vec![None; id_bound],
        }
    }

    /// Builds a queue from `(item, priority)` pairs in linear time.
    /// Later duplicates of an item are ignored.
    /// ** Panics if an item is `>= id_bound` **
    pub fn from_entries<I>(id_bound: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, P)>,
    {
        let mut pq = Self::new(id_bound);
        for (item, priority) in entries {
            if pq.positions[item as usize].is_none() {
                pq.positions[item as usize] = Some(pq.heap.len());
                pq.heap.push((priority, item));
            }
        }
        for i in (0..pq.heap.len() / 2).rev() {
            pq.sift_down(i);
        }
        pq
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns *true* if `item` is currently enqueued
    pub fn contains(&self, item: VertexId) -> bool {
        self.positions
            .get(item as usize)
            .is_some_and(|p| p.is_some())
    }

    /// Returns the current priority of `item` if enqueued
    pub fn priority_of(&self, item: VertexId) -> Option<P> {
        let pos = (*self.positions.get(item as usize)?)?;
        Some(self.heap[pos].0)
    }

    /// Enqueues `item`; returns *false* (and does nothing) if it is already enqueued.
    /// ** Panics if `item >= id_bound` **
    pub fn push(&mut self, item: VertexId, priority: P) -> bool {
        if self.contains(item) {
            return false;
        }
        let pos = self.heap.len();
        self.heap.push((priority, item));
        self.positions[item as usize] = Some(pos);
        self.sift_up(pos);
        true
    }

    /// Returns the minimum without removing it
    pub fn peek(&self) -> Option<(VertexId, P)> {
        self.heap.first().map(|&(p, u)| (u, p))
    }

    /// Removes and returns the minimum
    pub fn pop(&mut self) -> Option<(VertexId, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, item) = self.heap.pop()?;
        self.positions[item as usize] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    /// Lowers the priority of an enqueued `item` to `priority`.
    /// Returns *false* if `item` is not enqueued or `priority` is not smaller.
    pub fn decrease_key(&mut self, item: VertexId, priority: P) -> bool {
        let Some(Some(pos)) = self.positions.get(item as usize).copied() else {
            return false;
        };
        if priority >= self.heap[pos].0 {
            return false;
        }
        self.heap[pos].0 = priority;
        self.sift_up(pos);
        true
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i].1 as usize] = Some(i);
        self.positions[self.heap[j].1 as usize] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] >= self.heap[parent] {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < n && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < n && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
