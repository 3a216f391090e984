use crate::prelude::Real;
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    iter::FromIterator,
};

/// Absolute recovery time, totally ordered so it can live in a heap.
#[derive(Debug, Copy, Clone)]
struct RecoveryTime(Real);

impl PartialEq for RecoveryTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RecoveryTime {}

impl PartialOrd for RecoveryTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecoveryTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Multiset of the recovery times of currently infectious individuals.
///
/// Backed by a binary min-heap so the next recovery is found in O(1) and
/// insertions/removals cost O(log k) for k infectious individuals.
#[derive(Debug, Clone, Default)]
pub struct RecoveryQueue {
    heap: BinaryHeap<Reverse<RecoveryTime>>,
}

impl RecoveryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue for individuals infected at t = 0 with the given infectious
    /// periods.
    pub fn seeded(periods: &[Real]) -> Self {
        periods.iter().cloned().collect()
    }

    /// Register an individual that recovers at the given absolute time.
    pub fn push(&mut self, time: Real) {
        self.heap.push(Reverse(RecoveryTime(time)));
    }

    /// Time of the next recovery.
    pub fn peek(&self) -> Option<Real> {
        self.heap.peek().map(|Reverse(t)| t.0)
    }

    /// Remove the next recovery and return its time.
    pub fn pop(&mut self) -> Option<Real> {
        self.heap.pop().map(|Reverse(t)| t.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<Real> for RecoveryQueue {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        RecoveryQueue {
            heap: iter.into_iter().map(|t| Reverse(RecoveryTime(t))).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut queue = RecoveryQueue::seeded(&[3.0, 1.0, 2.0]);
        queue.push(0.5);
        queue.push(2.0);
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some(0.5));

        let mut times = vec![];
        while let Some(t) = queue.pop() {
            times.push(t);
        }
        assert_eq!(times, vec![0.5, 1.0, 2.0, 2.0, 3.0]);
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }
}
