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

//! Exhaustive entry point.
//!
//! `solve` scores every selection on `n_jobs` workers and returns the best
//! one. Ties resolve to the lexicographically first selection in pool order.

use crate::{error::SolveError, options::SolveOptions};
use enusearch_core::num::ObjectiveValue;
use enusearch_exhaustive::{
    solver::{ExhaustiveOutcome, ExhaustiveSolver},
    threads::Threads,
};
use enusearch_model::{objective::Objective, solution::Solution};

/// Finds the best selection of `candidates` for `objective` by scoring all
/// of them.
///
/// # Errors
///
/// - `SolveError::Config` for an empty pool or an unusable selection size.
/// - `SolveError::InvalidJobs` for a job count below `-2`.
/// - `SolveError::Objective` with an error the objective returned.
pub fn solve<C, T, O, I>(
    objective: O,
    candidates: I,
    options: &SolveOptions,
) -> Result<Solution<C, T>, SolveError<O::Error>>
where
    C: Clone + PartialEq + Sync,
    T: ObjectiveValue,
    O: Objective<C, T> + Clone + Send,
    O::Error: Send,
    I: IntoIterator<Item = C>,
{
    solve_outcome(objective, candidates, options)?
        .into_solution()
        .ok_or(SolveError::NoSolution)
}

/// Like `solve`, but returns the evaluation count and timing as well.
///
/// # Errors
///
/// As for `solve`, except that an outcome without a solution is `Ok`.
pub fn solve_outcome<C, T, O, I>(
    objective: O,
    candidates: I,
    options: &SolveOptions,
) -> Result<ExhaustiveOutcome<C, T>, SolveError<O::Error>>
where
    C: Clone + PartialEq + Sync,
    T: ObjectiveValue,
    O: Objective<C, T> + Clone + Send,
    O::Error: Send,
    I: IntoIterator<Item = C>,
{
    let problem = options.build_problem(candidates)?;
    let threads =
        Threads::from_n_jobs(options.jobs()).ok_or(SolveError::InvalidJobs(options.jobs()))?;

    ExhaustiveSolver::new()
        .with_threads(threads)
        .with_verbose(options.is_verbose())
        .solve(&problem, &objective)
        .map_err(SolveError::Objective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(x: &[i64]) -> i64 {
        x.iter().sum()
    }

    #[test]
    fn test_solve_outcome_counts_every_selection() {
        let options = SolveOptions::new().order(true).selection_size(2);
        let outcome = solve_outcome(sum, vec![1i64, 2, 3], &options).unwrap();
        assert_eq!(outcome.evaluations(), 6);
        assert_eq!(outcome.threads(), 1);
    }

    #[test]
    fn test_invalid_jobs() {
        let options = SolveOptions::new().n_jobs(-3);
        let err = solve(sum, vec![1i64, 2, 3], &options).unwrap_err();
        assert_eq!(err, SolveError::InvalidJobs(-3));
    }
}
