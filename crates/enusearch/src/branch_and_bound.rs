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

//! Branch-and-bound entry point.
//!
//! `solve` validates the configuration, runs `enusearch_bnb::bnb::BnbSolver`
//! and returns the incumbent. With `verbose` set, a `LogTreeSearchMonitor`
//! reports progress every 1000 steps and a summary at the end; otherwise the
//! run is silent.
//!
//! The result is exact when the sign-adjusted objective never decreases from
//! a selection to any selection branched from it: appending a candidate in
//! permutation mode, dropping one in combination mode. Use
//! `enusearch_bnb::eval::validation::is_monotone_exhaustive` to probe an
//! objective on a small pool, or `crate::exhaustive` when in doubt.

use crate::{error::SolveError, options::SolveOptions};
use enusearch_bnb::{
    bnb::BnbSolver,
    monitor::{composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor},
    result::BnbSolverOutcome,
    seeding::GreedyDive,
};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::{objective::Objective, solution::Solution};

/// Finds the best selection of `candidates` for `objective`.
///
/// # Errors
///
/// - `SolveError::Config` if the pool is empty or the selection size is zero
///   or larger than the pool.
/// - `SolveError::Objective` with the first error the objective returned.
/// - `SolveError::NoSolution` if no selection could be compared, which only
///   happens when the objective returns NaN.
pub fn solve<C, T, O, I>(
    objective: O,
    candidates: I,
    options: &SolveOptions,
) -> Result<Solution<C, T>, SolveError<O::Error>>
where
    C: Clone + PartialEq,
    T: ObjectiveValue,
    O: Objective<C, T>,
    I: IntoIterator<Item = C>,
{
    solve_outcome(objective, candidates, options)?
        .into_solution()
        .map_err(|_| SolveError::NoSolution)
}

/// Like `solve`, but returns the full solver outcome with statistics and the
/// termination reason.
///
/// # Errors
///
/// `SolveError::Config` and `SolveError::Objective` as for `solve`. An
/// outcome without a solution is returned as `Ok`.
pub fn solve_outcome<C, T, O, I>(
    mut objective: O,
    candidates: I,
    options: &SolveOptions,
) -> Result<BnbSolverOutcome<C, T>, SolveError<O::Error>>
where
    C: Clone + PartialEq,
    T: ObjectiveValue,
    O: Objective<C, T>,
    I: IntoIterator<Item = C>,
{
    let problem = options.build_problem(candidates)?;

    let mut monitor = CompositeTreeSearchMonitor::with_capacity(1);
    if options.is_verbose() {
        monitor.add_monitor(LogTreeSearchMonitor::default());
    }

    let mut solver = BnbSolver::preallocated(problem.pool_size(), problem.selection_size());
    let outcome = if options.is_warm_start() {
        solver.solve_with_seeder(&problem, &mut objective, monitor, GreedyDive::new())
    } else {
        solver.solve(&problem, &mut objective, monitor)
    };

    outcome.map_err(SolveError::Objective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(x: &[i64]) -> i64 {
        x.iter().sum()
    }

    #[test]
    fn test_solve_outcome_reports_statistics() {
        let options = SolveOptions::new().order(true).selection_size(2);
        let outcome = solve_outcome(sum, vec![1i64, 2, 3], &options).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.statistics().evaluations, 7);
        assert_eq!(outcome.solution().unwrap().objective_value(), 3);
    }

    #[test]
    fn test_nan_objective_is_no_solution() {
        let nan = |_: &[f64]| f64::NAN;
        let err = solve(nan, vec![1.0, 2.0], &SolveOptions::new()).unwrap_err();
        assert_eq!(err, SolveError::NoSolution);
    }
}
