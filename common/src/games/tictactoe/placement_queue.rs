use std::fmt;

use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::types::MAX_PIECES;

/// Cells holding one mark's pieces, oldest first.
#[derive(Clone)]
pub struct PlacementQueue {
    cells: AllocRingBuffer<usize>,
}

impl PlacementQueue {
    pub fn new() -> Self {
        Self {
            cells: AllocRingBuffer::new(MAX_PIECES),
        }
    }

    /// Appends `cell` and returns the evicted oldest cell when the queue was
    /// already at capacity.
    pub fn push(&mut self, cell: usize) -> Option<usize> {
        let evicted = if self.cells.is_full() {
            self.cells.dequeue()
        } else {
            None
        };
        let _ = self.cells.enqueue(cell);
        evicted
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn oldest(&self) -> Option<usize> {
        self.cells.iter().next().copied()
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.iter().any(|&c| c == cell)
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.cells.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl Default for PlacementQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PlacementQueue {
    fn eq(&self, other: &Self) -> bool {
        self.cells.iter().eq(other.cells.iter())
    }
}

impl Eq for PlacementQueue {}

impl fmt::Debug for PlacementQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_below_capacity_does_not_evict() {
        let mut queue = PlacementQueue::new();
        assert_eq!(queue.push(4), None);
        assert_eq!(queue.push(0), None);
        assert_eq!(queue.push(8), None);
        assert_eq!(queue.to_vec(), vec![4, 0, 8]);
        assert_eq!(queue.oldest(), Some(4));
    }

    #[test]
    fn test_fourth_push_evicts_oldest() {
        let mut queue = PlacementQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.push(7), Some(1));
        assert_eq!(queue.to_vec(), vec![2, 3, 7]);
        assert_eq!(queue.push(5), Some(2));
        assert_eq!(queue.to_vec(), vec![3, 7, 5]);
        assert_eq!(queue.len(), MAX_PIECES);
    }

    #[test]
    fn test_equality_follows_order() {
        let mut a = PlacementQueue::new();
        let mut b = PlacementQueue::new();
        a.push(1);
        a.push(2);
        b.push(2);
        b.push(1);
        assert_ne!(a, b);
        b.clear();
        b.push(1);
        b.push(2);
        assert_eq!(a, b);
    }
}
