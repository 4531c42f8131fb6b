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

//! Branch generation
//!
//! `BranchGenerator` scores a batch of positions and arranges the resulting
//! nodes for stack consumption: descending by internal value, so that the
//! most promising node sits at the end of the batch where `Vec::pop` takes
//! it first. The sort is stable, so equally valued nodes keep their
//! generation order and the later one is popped first. Incomparable values
//! (NaN) are treated as the worst possible value.
//!
//! The generator owns a reusable candidate buffer. Positions are materialized
//! into it one at a time, so scoring a batch allocates nothing beyond the
//! nodes themselves.

use crate::node::{Node, Position};
use enusearch_core::num::{ObjectiveValue, compare_values};
use enusearch_model::{index::CandidateIndex, objective::Objective, problem::Problem};

/// Scores positions through an `Objective` and orders the resulting nodes.
#[derive(Clone, Debug)]
pub struct BranchGenerator<C> {
    scratch: Vec<C>,
    evaluations: u64,
}

impl<C> Default for BranchGenerator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> BranchGenerator<C> {
    /// Creates a new `BranchGenerator`.
    #[inline]
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
            evaluations: 0,
        }
    }

    /// Creates a `BranchGenerator` whose buffer holds `selection_capacity`
    /// candidates without reallocating.
    #[inline]
    pub fn preallocated(selection_capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(selection_capacity),
            evaluations: 0,
        }
    }

    /// Returns the number of objective evaluations performed so far.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Resets the evaluation counter, keeping the allocated buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.scratch.clear();
        self.evaluations = 0;
    }
}

impl<C> BranchGenerator<C>
where
    C: Clone,
{
    /// Scores a single position and returns its internal value.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged.
    #[inline]
    pub fn evaluate<T, O>(
        &mut self,
        problem: &Problem<C>,
        objective: &mut O,
        position: &[CandidateIndex],
    ) -> Result<T, O::Error>
    where
        T: ObjectiveValue,
        O: Objective<C, T> + ?Sized,
    {
        problem.materialize_into(position, &mut self.scratch);
        let score = objective.evaluate(&self.scratch)?;
        self.evaluations = self.evaluations.saturating_add(1);
        Ok(problem.sense().internalize(score))
    }

    /// Scores every position in `positions` and writes the nodes into `out`,
    /// sorted so that the smallest internal value is last.
    ///
    /// `positions` is drained; `out` is cleared first. On error both are left
    /// in an unspecified but valid state.
    ///
    /// # Errors
    ///
    /// Returns the first objective error. Positions after the failing one are
    /// not evaluated.
    pub fn generate<T, O>(
        &mut self,
        problem: &Problem<C>,
        objective: &mut O,
        positions: &mut Vec<Position>,
        out: &mut Vec<Node<T>>,
    ) -> Result<(), O::Error>
    where
        T: ObjectiveValue,
        O: Objective<C, T> + ?Sized,
    {
        out.clear();
        out.reserve(positions.len());

        for position in positions.drain(..) {
            let value = self.evaluate(problem, objective, &position)?;
            out.push(Node::new(position, value));
        }

        sort_for_stack(out);
        Ok(())
    }
}

/// Sorts nodes descending by internal value so the most promising node is
/// last. Stable: ties keep their relative order.
#[inline]
pub fn sort_for_stack<T>(nodes: &mut [Node<T>])
where
    T: ObjectiveValue,
{
    nodes.sort_by(|a, b| compare_values(b.value(), a.value()));
}
