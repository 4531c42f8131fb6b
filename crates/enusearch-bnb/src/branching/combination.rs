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

//! Combination-mode subspace construction
//!
//! `CombinationSubspaceBuilder` shrinks a position by dropping exactly one
//! element. The single root is the whole pool; children keep the element
//! order of their parent and are emitted in lexicographic order of the kept
//! slots, i.e. dropping the last element first and the first element last.
//!
//! With `DuplicateHandling::Preserve`, dropping either copy of a repeated
//! candidate yields its own child, even though both hold the same values.
//! With `DuplicateHandling::Collapse` the root is arranged so that equal
//! candidates are adjacent, and of a run of equal elements only one drop is
//! emitted.

use crate::{branching::subspace::SubspaceBuilder, node::Position};
use enusearch_model::{
    index::CandidateIndex,
    problem::{DuplicateHandling, Problem},
};

/// Drops one element per child.
#[derive(Clone, Debug)]
pub struct CombinationSubspaceBuilder {
    root: Position,
    /// `classes[i]` is the value class of occurrence `i`.
    classes: Vec<usize>,
    collapse: bool,
}

impl CombinationSubspaceBuilder {
    /// Creates a builder for the candidate pool of `problem`.
    pub fn from_problem<C>(problem: &Problem<C>) -> Self {
        let pool_size = problem.pool_size();
        let classes: Vec<usize> = CandidateIndex::range(pool_size)
            .map(|i| problem.value_class(i))
            .collect();
        let collapse = problem.duplicate_handling() == DuplicateHandling::Collapse;

        let mut root: Position = CandidateIndex::range(pool_size).collect();
        if collapse {
            root.sort_unstable_by_key(|i| (classes[i.get()], i.get()));
        }

        Self {
            root,
            classes,
            collapse,
        }
    }

    /// Returns the number of occurrences in the pool.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.classes.len()
    }

    #[inline(always)]
    fn same_value(&self, a: CandidateIndex, b: CandidateIndex) -> bool {
        self.classes[a.get()] == self.classes[b.get()]
    }
}

impl SubspaceBuilder for CombinationSubspaceBuilder {
    fn name(&self) -> &str {
        "CombinationSubspaceBuilder"
    }

    fn roots(&self, out: &mut Vec<Position>) {
        out.push(self.root.clone());
    }

    fn extend(&mut self, position: &[CandidateIndex], out: &mut Vec<Position>) {
        let len = position.len();
        out.reserve(len);

        for dropped in (0..len).rev() {
            // Equal neighbours produce the same child; the later drop was emitted already.
            if self.collapse
                && dropped + 1 < len
                && self.same_value(position[dropped], position[dropped + 1])
            {
                continue;
            }

            let mut child = Position::with_capacity(len - 1);
            child.extend_from_slice(&position[..dropped]);
            child.extend_from_slice(&position[dropped + 1..]);
            out.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enusearch_model::problem::ProblemBuilder;

    fn ci(i: usize) -> CandidateIndex {
        CandidateIndex::new(i)
    }

    fn builder<C: PartialEq>(
        candidates: Vec<C>,
        handling: DuplicateHandling,
    ) -> CombinationSubspaceBuilder {
        let problem = ProblemBuilder::new(candidates)
            .order(false)
            .selection_size(1)
            .duplicate_handling(handling)
            .build()
            .unwrap();
        CombinationSubspaceBuilder::from_problem(&problem)
    }

    fn as_indices(out: &[Position]) -> Vec<Vec<usize>> {
        out.iter()
            .map(|p| p.iter().map(|i| i.get()).collect())
            .collect()
    }

    #[test]
    fn test_root_is_the_full_pool_in_input_order() {
        let b = builder(vec![3, 1, 3, 2], DuplicateHandling::Preserve);
        let mut out = Vec::new();
        b.roots(&mut out);
        assert_eq!(as_indices(&out), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_root_groups_equal_values_when_collapsing() {
        let b = builder(vec![3, 1, 3, 2], DuplicateHandling::Collapse);
        let mut out = Vec::new();
        b.roots(&mut out);
        assert_eq!(as_indices(&out), vec![vec![0, 2, 1, 3]]);
    }

    #[test]
    fn test_extend_drops_last_element_first() {
        let mut b = builder(vec![10, 20, 30, 40], DuplicateHandling::Preserve);
        let mut out = Vec::new();
        b.extend(&[ci(0), ci(1), ci(2), ci(3)], &mut out);
        assert_eq!(
            as_indices(&out),
            vec![
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 2, 3],
                vec![1, 2, 3]
            ]
        );
    }

    #[test]
    fn test_extend_keeps_parent_order() {
        let mut b = builder(vec![10, 20, 30], DuplicateHandling::Preserve);
        let mut out = Vec::new();
        b.extend(&[ci(2), ci(0), ci(1)], &mut out);
        assert_eq!(as_indices(&out), vec![vec![2, 0], vec![2, 1], vec![0, 1]]);
    }

    #[test]
    fn test_extend_preserves_duplicate_sub_multisets() {
        let mut b = builder(vec![7, 7, 9], DuplicateHandling::Preserve);
        let mut out = Vec::new();
        b.extend(&[ci(0), ci(1), ci(2)], &mut out);
        // Dropping either 7 yields {7, 9}; both are emitted.
        assert_eq!(as_indices(&out), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_extend_collapses_runs_of_equal_values() {
        let mut b = builder(vec![7, 7, 9, 7], DuplicateHandling::Collapse);
        let mut root = Vec::new();
        b.roots(&mut root);
        assert_eq!(as_indices(&root), vec![vec![0, 1, 3, 2]]);

        let mut out = Vec::new();
        b.extend(&root[0], &mut out);
        // Drop 9, then one 7.
        assert_eq!(as_indices(&out), vec![vec![0, 1, 3], vec![0, 1, 2]]);
    }

    #[test]
    fn test_extend_of_singleton_and_empty() {
        let mut b = builder(vec![1, 2], DuplicateHandling::Preserve);
        let mut out = Vec::new();
        b.extend(&[ci(1)], &mut out);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty());

        out.clear();
        b.extend(&[], &mut out);
        assert!(out.is_empty());
    }
}
