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

//! Validation utilities for objectives. This module provides a small harness
//! for checking that an `Objective` is monotone in the sense required by the
//! solver: along every branching step, the internal value of the child must
//! not be smaller than the internal value of its parent.
//!
//! The check walks the branching tree of a concrete problem depth-first, using
//! the same subspace builder and branch generator as the solver, and compares
//! every child against its parent. It stops at the first violation or once a
//! node budget is spent, so large instances can be probed partially. The walk
//! never descends below the selection size, because the solver never does.
//!
//! These routines are intended for diagnostics during development and
//! testing; they do not attempt to prove properties beyond the visited nodes.

use crate::{
    branching::subspace::{ModeSubspaceBuilder, SubspaceBuilder},
    eval::generator::BranchGenerator,
    node::Node,
};
use enusearch_core::num::{ObjectiveValue, compare_values};
use enusearch_model::{objective::Objective, problem::Problem};
use std::cmp::Ordering;

/// Checks whether `objective` is monotone on the branching tree of `problem`.
///
/// Up to `max_nodes` nodes are expanded. Returns `Ok(true)` when no child with
/// a smaller internal value than its parent was found, and `Ok(false)` at the
/// first violation.
///
/// # Errors
///
/// Returns the objective's error unchanged.
pub fn is_monotone_exhaustive<C, T, O>(
    problem: &Problem<C>,
    objective: &mut O,
    max_nodes: usize,
) -> Result<bool, O::Error>
where
    C: Clone,
    T: ObjectiveValue,
    O: Objective<C, T> + ?Sized,
{
    let mut builder = ModeSubspaceBuilder::from_problem(problem);
    let mut generator = BranchGenerator::preallocated(problem.pool_size());
    let mut positions = Vec::new();
    let mut pending: Vec<Node<T>> = Vec::new();
    let mut children: Vec<Node<T>> = Vec::new();

    builder.roots(&mut positions);
    generator.generate(problem, objective, &mut positions, &mut pending)?;

    let mut expanded = 0usize;
    while let Some(parent) = pending.pop() {
        if expanded >= max_nodes {
            break;
        }
        if parent.len() == problem.selection_size() {
            continue;
        }
        expanded += 1;

        builder.extend(parent.position(), &mut positions);
        generator.generate(problem, objective, &mut positions, &mut children)?;

        if let Some(child) = children
            .iter()
            .find(|child| compare_values(child.value(), parent.value()) == Ordering::Less)
        {
            tracing::debug!(
                objective = objective.name(),
                parent = %parent,
                child = %child,
                "monotonicity violated"
            );
            return Ok(false);
        }

        pending.append(&mut children);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enusearch_model::objective::Fallible;
    use enusearch_model::problem::ProblemBuilder;

    fn weighted_sum(s: &[i64]) -> i64 {
        s.iter()
            .enumerate()
            .map(|(i, v)| (i as i64 + 1) * v)
            .sum()
    }

    #[test]
    fn test_sum_of_nonnegative_is_monotone_when_minimizing_permutations() {
        let problem = ProblemBuilder::new(vec![3i64, 0, 5, 2])
            .order(true)
            .minimize(true)
            .selection_size(3)
            .build()
            .unwrap();
        let mut objective = weighted_sum;
        assert_eq!(is_monotone_exhaustive(&problem, &mut objective, 10_000), Ok(true));
    }

    #[test]
    fn test_growing_sum_is_not_monotone_when_maximizing_permutations() {
        let problem = ProblemBuilder::new(vec![3i64, 1, 5])
            .order(true)
            .minimize(false)
            .selection_size(2)
            .build()
            .unwrap();
        let mut objective = |s: &[i64]| s.iter().sum::<i64>();
        assert_eq!(is_monotone_exhaustive(&problem, &mut objective, 10_000), Ok(false));
    }

    #[test]
    fn test_sum_is_monotone_when_maximizing_combinations() {
        let problem = ProblemBuilder::new(vec![2i64, 4, 5, 6, 3, 1, 7])
            .order(false)
            .minimize(false)
            .selection_size(5)
            .build()
            .unwrap();
        let mut objective = |s: &[i64]| s.iter().sum::<i64>();
        assert_eq!(is_monotone_exhaustive(&problem, &mut objective, 10_000), Ok(true));
    }

    #[test]
    fn test_sum_is_not_monotone_when_minimizing_combinations() {
        let problem = ProblemBuilder::new(vec![2i64, 4, 5])
            .order(false)
            .minimize(true)
            .selection_size(1)
            .build()
            .unwrap();
        let mut objective = |s: &[i64]| s.iter().sum::<i64>();
        assert_eq!(is_monotone_exhaustive(&problem, &mut objective, 10_000), Ok(false));
    }

    #[test]
    fn test_zero_budget_accepts_without_expanding() {
        let problem = ProblemBuilder::new(vec![2i64, 4, 5])
            .order(false)
            .selection_size(1)
            .build()
            .unwrap();
        let mut objective = |s: &[i64]| s.iter().sum::<i64>();
        assert_eq!(is_monotone_exhaustive(&problem, &mut objective, 0), Ok(true));
    }

    #[test]
    fn test_objective_errors_are_propagated() {
        let problem = ProblemBuilder::new(vec![1i64, 2])
            .order(true)
            .build()
            .unwrap();
        let mut objective = Fallible(|s: &[i64]| {
            if s.len() > 1 {
                Err("too long")
            } else {
                Ok(s[0])
            }
        });
        assert_eq!(
            is_monotone_exhaustive(&problem, &mut objective, 10_000),
            Err("too long")
        );
    }
}
