use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An open-set entry ordered for use in a `BinaryHeap`.
///
/// The heap pops the lowest `priority` first. Among equal priorities the
/// entry pushed last is popped first.
pub(crate) struct Entry<P> {
    pub(crate) point: P,
    pub(crate) priority: f64,
    seq: u64,
}

impl<P> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P> Eq for Entry<P> {}

impl<P> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse priority so the max-heap yields the smallest one.
        other
            .priority
            .total_cmp(&self.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<P> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of points with a push counter for tie-breaking.
pub(crate) struct Frontier<P> {
    heap: BinaryHeap<Entry<P>>,
    seq: u64,
}

impl<P> Default for Frontier<P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<P> Frontier<P> {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, point: P, priority: f64) {
        self.seq += 1;
        self.heap.push(Entry {
            point,
            priority,
            seq: self.seq,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<P>> {
        self.heap.pop()
    }
}
