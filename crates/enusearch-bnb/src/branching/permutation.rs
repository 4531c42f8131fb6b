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

//! Order-mode subspace construction
//!
//! `PermutationSubspaceBuilder` grows a position by appending one occurrence
//! that the position does not use yet. Occurrence bookkeeping makes the
//! multiset difference implicit: a candidate repeated `m` times in the pool
//! stays available until all `m` occurrences are placed.
//!
//! Children are emitted grouped by value class, classes ordered by their first
//! occurrence in the pool and occurrences within a class in pool order. With
//! `DuplicateHandling::Collapse` only the first unused occurrence of each class
//! is appended, so no two siblings hold the same values.

use crate::{branching::subspace::SubspaceBuilder, node::Position};
use enusearch_model::{
    index::CandidateIndex,
    problem::{DuplicateHandling, Problem},
};
use fixedbitset::FixedBitSet;
use smallvec::smallvec;

/// Appends one unused occurrence per child.
#[derive(Clone, Debug)]
pub struct PermutationSubspaceBuilder {
    /// All occurrences, grouped by value class.
    pool_order: Vec<CandidateIndex>,
    /// `classes[i]` is the value class of occurrence `i`.
    classes: Vec<usize>,
    collapse: bool,
    /// Scratch set of the occurrences used by the position being extended.
    used: FixedBitSet,
}

impl PermutationSubspaceBuilder {
    /// Creates a builder for the candidate pool of `problem`.
    pub fn from_problem<C>(problem: &Problem<C>) -> Self {
        let pool_size = problem.pool_size();
        let classes: Vec<usize> = CandidateIndex::range(pool_size)
            .map(|i| problem.value_class(i))
            .collect();

        let mut pool_order: Vec<CandidateIndex> = CandidateIndex::range(pool_size).collect();
        pool_order.sort_unstable_by_key(|i| (classes[i.get()], i.get()));

        Self {
            pool_order,
            classes,
            collapse: problem.duplicate_handling() == DuplicateHandling::Collapse,
            used: FixedBitSet::with_capacity(pool_size),
        }
    }

    /// Returns the number of occurrences in the pool.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.classes.len()
    }
}

impl SubspaceBuilder for PermutationSubspaceBuilder {
    fn name(&self) -> &str {
        "PermutationSubspaceBuilder"
    }

    /// One singleton per occurrence, in pool order. When collapsing, only the
    /// first occurrence of every value class seeds a branch.
    fn roots(&self, out: &mut Vec<Position>) {
        out.reserve(self.pool_size());
        for index in CandidateIndex::range(self.pool_size()) {
            if self.collapse && self.classes[index.get()] != index.get() {
                continue;
            }
            out.push(smallvec![index]);
        }
    }

    fn extend(&mut self, position: &[CandidateIndex], out: &mut Vec<Position>) {
        self.used.clear();
        for &index in position {
            debug_assert!(
                index.get() < self.pool_size(),
                "called `PermutationSubspaceBuilder::extend` with occurrence out of bounds: the len is {} but the index is {}",
                self.pool_size(),
                index.get()
            );
            debug_assert!(
                !self.used.contains(index.get()),
                "called `PermutationSubspaceBuilder::extend` with occurrence {} used twice",
                index.get()
            );
            self.used.insert(index.get());
        }

        out.reserve(self.pool_size().saturating_sub(position.len()));

        let mut last_class: Option<usize> = None;
        for &candidate in &self.pool_order {
            if self.used.contains(candidate.get()) {
                continue;
            }

            let class = self.classes[candidate.get()];
            if self.collapse && last_class == Some(class) {
                continue;
            }
            last_class = Some(class);

            let mut child = Position::with_capacity(position.len() + 1);
            child.extend_from_slice(position);
            child.push(candidate);
            out.push(child);
        }
    }
}
