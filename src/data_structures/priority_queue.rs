use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(priority, vertex)` entries for Dijkstra.
///
/// There is no decrease-key: a vertex may be pushed several times, and
/// callers are expected to discard stale entries when they pop them.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an entry, even if `vertex` is already present with another priority
    pub fn push(&mut self, vertex: usize, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<P> Default for Frontier<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(3, 7);
        frontier.push(1, -2);
        frontier.push(2, 4);

        assert_eq!(frontier.pop(), Some((1, -2)));
        assert_eq!(frontier.pop(), Some((2, 4)));
        assert_eq!(frontier.pop(), Some((3, 7)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut frontier = Frontier::new();
        frontier.push(5, 10);
        frontier.push(5, 3);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((5, 3)));
        assert_eq!(frontier.pop(), Some((5, 10)));
        assert!(frontier.is_empty());
    }
}
