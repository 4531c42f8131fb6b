// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{eval::generator::sort_for_stack, node::Node};
use enusearch_core::num::ObjectiveValue;

/// The pending nodes of a search, consumed as a stack.
///
/// Entries are kept sorted descending by internal value after every
/// insertion, so `pop` always returns the node with the smallest value and,
/// among equally valued nodes, the one inserted last.
///
/// Performance notes:
/// - `preallocated` helps avoid reallocations on the first levels.
/// - `reset` keeps the allocation, so a reused solver does not grow again.
/// - `extend_sorted` re-sorts the whole frontier. The standard library sort
///   detects the two sorted runs (old entries, new batch) and merges them.
#[derive(Clone, Debug)]
pub struct Frontier<T> {
    entries: Vec<Node<T>>,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    /// Creates a new, empty `Frontier`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Frontier` with room for `capacity` nodes.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Ensures the frontier can hold `capacity` nodes without reallocating.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.entries.capacity() < capacity {
            self.entries.reserve(capacity - self.entries.len());
        }
    }

    /// Returns the number of pending nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no node is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of nodes the frontier can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Pops the most promising node.
    #[inline]
    pub fn pop(&mut self) -> Option<Node<T>> {
        self.entries.pop()
    }

    /// Returns the node `pop` would return next.
    #[inline]
    pub fn peek(&self) -> Option<&Node<T>> {
        self.entries.last()
    }

    /// Clears all entries, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns all pending nodes, most promising last.
    #[inline]
    pub fn entries(&self) -> &[Node<T>] {
        &self.entries
    }

    /// Returns the total allocated memory of the entry buffer in bytes.
    /// Spilled positions are not included.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<Node<T>>()
    }
}

impl<T> Frontier<T>
where
    T: ObjectiveValue,
{
    /// Moves every node of `batch` onto the frontier and restores the order.
    ///
    /// Nodes already pending stay below equally valued nodes of `batch`, so
    /// the newest of a tie is examined first.
    #[inline]
    pub fn extend_sorted(&mut self, batch: &mut Vec<Node<T>>) {
        self.entries.append(batch);
        sort_for_stack(&mut self.entries);
    }
}

impl<T> std::fmt::Display for Frontier<T>
where
    T: std::fmt::Display + Copy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.entries.last() {
            Some(best) => write!(
                f,
                "Frontier(entries: {}, best: {})",
                self.entries.len(),
                best.value()
            ),
            None => write!(f, "Frontier(entries: 0)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enusearch_model::index::CandidateIndex;
    use smallvec::smallvec;

    fn n(tag: usize, value: i64) -> Node<i64> {
        Node::new(smallvec![CandidateIndex::new(tag)], value)
    }

    fn tags(nodes: &[Node<i64>]) -> Vec<usize> {
        nodes.iter().map(|n| n.position()[0].get()).collect()
    }

    #[test]
    fn test_new_and_preallocated_basic_props() {
        let f: Frontier<i64> = Frontier::new();
        assert_eq!(f.len(), 0);
        assert!(f.is_empty());
        assert!(f.peek().is_none());
        assert_eq!(format!("{}", f), "Frontier(entries: 0)");

        let g: Frontier<i64> = Frontier::preallocated(16);
        assert!(g.capacity() >= 16);
        assert!(g.allocated_memory_bytes() > 0);
    }

    #[test]
    fn test_pop_returns_smallest_value_first() {
        let mut f = Frontier::new();
        f.extend_sorted(&mut vec![n(0, 5), n(1, 2), n(2, 9)]);
        assert_eq!(f.peek().unwrap().value(), 2);
        assert_eq!(f.pop().unwrap().value(), 2);
        assert_eq!(f.pop().unwrap().value(), 5);
        assert_eq!(f.pop().unwrap().value(), 9);
        assert!(f.pop().is_none());
    }

    #[test]
    fn test_extend_sorted_merges_and_drains_batch() {
        let mut f = Frontier::new();
        f.extend_sorted(&mut vec![n(0, 8), n(1, 4)]);

        let mut batch = vec![n(2, 6), n(3, 1)];
        f.extend_sorted(&mut batch);
        assert!(batch.is_empty());
        assert_eq!(tags(f.entries()), vec![0, 2, 1, 3]);
        assert_eq!(format!("{}", f), "Frontier(entries: 4, best: 1)");
    }

    #[test]
    fn test_ties_pop_newest_first() {
        let mut f = Frontier::new();
        f.extend_sorted(&mut vec![n(0, 3)]);
        f.extend_sorted(&mut vec![n(1, 3), n(2, 3)]);
        assert_eq!(tags(f.entries()), vec![0, 1, 2]);
        assert_eq!(f.pop().unwrap().position()[0].get(), 2);
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut f = Frontier::preallocated(4);
        f.extend_sorted(&mut vec![n(0, 1), n(1, 2)]);
        let cap = f.capacity();
        f.reset();
        assert!(f.is_empty());
        assert_eq!(f.capacity(), cap);
    }

    #[test]
    fn test_ensure_capacity_grows_but_is_idempotent_when_large_enough() {
        let mut f: Frontier<i64> = Frontier::new();
        f.ensure_capacity(10);
        let cap = f.capacity();
        assert!(cap >= 10);
        f.ensure_capacity(3);
        assert_eq!(f.capacity(), cap);
    }
}
