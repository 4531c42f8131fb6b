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

//! Exhaustive enumerate-and-reduce solver
//!
//! `ExhaustiveSolver` scores every selection of a problem and keeps the best
//! one. Among equally valued selections the lexicographically first one (in
//! occurrence indices) wins, independent of the number of workers.
//!
//! Parallel runs split the selections by their first element. Worker `w` of
//! `n` owns the first elements `w, w + n, w + 2n, ...`, so the large groups at
//! the front of the combination order are spread over all workers. Every
//! worker scores with its own clone of the objective. An objective error
//! raises a shared stop flag; the remaining workers finish their current
//! group and return.

use crate::{
    enumerate::{first_elements, for_each_selection_from},
    threads::Threads,
};
use enusearch_core::num::{ObjectiveValue, compare_values};
use enusearch_model::{
    index::CandidateIndex, objective::Objective, problem::Problem, solution::Solution,
};
use std::{
    cmp::Ordering,
    sync::atomic::{AtomicBool, Ordering as AtomicOrdering},
    time::{Duration, Instant},
};

/// The result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExhaustiveOutcome<C, T> {
    solution: Option<Solution<C, T>>,
    evaluations: u64,
    duration: Duration,
    threads: usize,
}

impl<C, T> ExhaustiveOutcome<C, T> {
    /// Returns the best selection. Every validated problem has at least one
    /// selection, so this is `None` only for a run that scored nothing.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<C, T>> {
        self.solution.as_ref()
    }

    /// Consumes the outcome and returns the best selection.
    #[inline]
    pub fn into_solution(self) -> Option<Solution<C, T>> {
        self.solution
    }

    /// Returns the number of objective evaluations.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Returns the wall-clock duration of the search.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the number of workers that took part.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl<C, T> std::fmt::Display for ExhaustiveOutcome<C, T>
where
    T: ObjectiveValue + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.solution {
            Some(solution) => write!(
                f,
                "ExhaustiveOutcome(objective: {}, evaluations: {}, duration: {:.3}s, threads: {})",
                solution.objective_value(),
                self.evaluations,
                self.duration.as_secs_f64(),
                self.threads
            ),
            None => write!(
                f,
                "ExhaustiveOutcome(no solution, evaluations: {}, threads: {})",
                self.evaluations, self.threads
            ),
        }
    }
}

/// Scores every selection of a problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSolver {
    threads: Threads,
    verbose: bool,
}

impl ExhaustiveSolver {
    /// Creates a single-threaded, quiet solver.
    #[inline]
    pub fn new() -> Self {
        Self {
            threads: Threads::Single,
            verbose: false,
        }
    }

    /// Sets the number of workers.
    #[inline]
    pub fn with_threads(mut self, threads: Threads) -> Self {
        self.threads = threads;
        self
    }

    /// Reports the final summary at `INFO` instead of `DEBUG` level.
    #[inline]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the configured number of workers.
    #[inline]
    pub fn threads(&self) -> Threads {
        self.threads
    }

    /// Scores every selection of `problem` and returns the best one.
    ///
    /// # Errors
    ///
    /// Returns an objective error if any worker hit one. With several
    /// failing workers, the error of the lowest numbered worker is returned.
    pub fn solve<C, T, O>(
        &self,
        problem: &Problem<C>,
        objective: &O,
    ) -> Result<ExhaustiveOutcome<C, T>, O::Error>
    where
        C: Clone + Sync,
        T: ObjectiveValue,
        O: Objective<C, T> + Clone + Send,
        O::Error: Send,
    {
        let start_time = Instant::now();
        let firsts = first_elements(
            problem.mode(),
            problem.pool_size(),
            problem.selection_size(),
        );
        let workers = self.threads.resolve().min(firsts.len()).max(1);
        let stop = AtomicBool::new(false);

        let reports: Vec<Result<WorkerReport<T>, O::Error>> = if workers == 1 {
            let mut objective = objective.clone();
            vec![run_worker(problem, &mut objective, firsts, &stop)]
        } else {
            std::thread::scope(|scope| {
                let handles: Vec<_> = (0..workers)
                    .map(|worker| {
                        let mut objective = objective.clone();
                        let owned = firsts.clone().skip(worker).step_by(workers);
                        let stop = &stop;
                        scope.spawn(move || run_worker(problem, &mut objective, owned, stop))
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                    })
                    .collect()
            })
        };

        let mut evaluations = 0u64;
        let mut best: Option<(T, Vec<CandidateIndex>)> = None;
        for report in reports {
            let report = report?;
            evaluations = evaluations.saturating_add(report.evaluations);
            if let Some((value, position)) = report.best {
                if is_better(value, &position, best.as_ref()) {
                    best = Some((value, position));
                }
            }
        }

        let duration = start_time.elapsed();
        let objective_value = best
            .as_ref()
            .map(|(value, _)| problem.sense().externalize(*value));

        if self.verbose {
            tracing::info!(
                evaluations,
                duration_secs = duration.as_secs_f64(),
                threads = workers,
                best = ?objective_value,
                "exhaustive search finished"
            );
        } else {
            tracing::debug!(
                evaluations,
                duration_secs = duration.as_secs_f64(),
                threads = workers,
                best = ?objective_value,
                "exhaustive search finished"
            );
        }

        let solution = best.map(|(value, position)| {
            Solution::new(
                problem.sense().externalize(value),
                problem.materialize(&position),
                position,
            )
        });

        Ok(ExhaustiveOutcome {
            solution,
            evaluations,
            duration,
            threads: workers,
        })
    }
}

/// The best selection a single worker has seen.
struct WorkerReport<T> {
    best: Option<(T, Vec<CandidateIndex>)>,
    evaluations: u64,
}

/// Orders workers' bests by value, then by first element.
#[inline]
fn is_better<T>(value: T, position: &[CandidateIndex], best: Option<&(T, Vec<CandidateIndex>)>) -> bool
where
    T: ObjectiveValue,
{
    match best {
        None => true,
        Some((best_value, best_position)) => match compare_values(value, *best_value) {
            Ordering::Less => true,
            Ordering::Equal => position.first() < best_position.first(),
            Ordering::Greater => false,
        },
    }
}

fn run_worker<C, T, O, I>(
    problem: &Problem<C>,
    objective: &mut O,
    firsts: I,
    stop: &AtomicBool,
) -> Result<WorkerReport<T>, O::Error>
where
    C: Clone,
    T: ObjectiveValue,
    O: Objective<C, T>,
    I: Iterator<Item = usize>,
{
    let sense = problem.sense();
    let mut scratch: Vec<C> = Vec::with_capacity(problem.selection_size());
    let mut report = WorkerReport {
        best: None,
        evaluations: 0,
    };

    let mut score = |position: &[CandidateIndex]| -> Result<(), O::Error> {
        problem.materialize_into(position, &mut scratch);
        let value = sense.internalize(objective.evaluate(&scratch)?);
        report.evaluations = report.evaluations.saturating_add(1);

        // Strict: the earliest of equally valued selections stays.
        let improves = match &report.best {
            None => true,
            Some((best, _)) => compare_values(value, *best) == Ordering::Less,
        };
        if improves {
            report.best = Some((value, position.to_vec()));
        }
        Ok(())
    };

    for first in firsts {
        if stop.load(AtomicOrdering::Relaxed) {
            break;
        }

        let res = for_each_selection_from(
            problem.mode(),
            problem.pool_size(),
            problem.selection_size(),
            CandidateIndex::new(first),
            &mut score,
        );
        if let Err(err) = res {
            stop.store(true, AtomicOrdering::Relaxed);
            return Err(err);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enusearch_model::objective::Fallible;
    use enusearch_model::problem::ProblemBuilder;

    fn sum(selection: &[i64]) -> i64 {
        selection.iter().sum()
    }

    #[test]
    fn test_combination_maximize() {
        let problem = ProblemBuilder::new(vec![2i64, 4, 5, 6, 3, 1, 7])
            .minimize(false)
            .selection_size(5)
            .build()
            .unwrap();

        let outcome = ExhaustiveSolver::new().solve(&problem, &sum).unwrap();
        assert_eq!(outcome.evaluations(), 21);
        assert_eq!(outcome.threads(), 1);
        let solution = outcome.into_solution().unwrap();
        assert_eq!(solution.objective_value(), 25);
        assert_eq!(solution.selection(), &[4, 5, 6, 3, 7]);
    }

    #[test]
    fn test_permutation_minimize() {
        let problem = ProblemBuilder::new(vec![1i64, 2, 3])
            .order(true)
            .selection_size(2)
            .build()
            .unwrap();

        let outcome = ExhaustiveSolver::new().solve(&problem, &sum).unwrap();
        assert_eq!(outcome.evaluations(), 6);
        let solution = outcome.into_solution().unwrap();
        assert_eq!(solution.objective_value(), 3);
        assert_eq!(solution.selection(), &[1, 2]);
    }

    #[test]
    fn test_ties_resolve_to_the_first_selection_for_any_worker_count() {
        let problem = ProblemBuilder::new(vec!['a', 'b', 'c', 'd', 'e'])
            .order(true)
            .selection_size(3)
            .build()
            .unwrap();
        let constant = |_: &[char]| 0i32;

        for threads in [Threads::Single, Threads::Fixed(2), Threads::Fixed(3), Threads::All] {
            let outcome = ExhaustiveSolver::new()
                .with_threads(threads)
                .solve(&problem, &constant)
                .unwrap();
            assert_eq!(outcome.evaluations(), 60);
            let solution = outcome.into_solution().unwrap();
            assert_eq!(solution.selection(), &['a', 'b', 'c']);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pool = vec![9i64, -3, 4, 7, -8, 2, 5];
        let weighted = |s: &[i64]| {
            s.iter()
                .enumerate()
                .map(|(i, v)| (i as i64 + 1) * v * v - v)
                .sum::<i64>()
        };

        for order in [false, true] {
            let problem = ProblemBuilder::new(pool.clone())
                .order(order)
                .selection_size(3)
                .build()
                .unwrap();

            let sequential = ExhaustiveSolver::new()
                .solve(&problem, &weighted)
                .unwrap()
                .into_solution()
                .unwrap();
            let parallel = ExhaustiveSolver::new()
                .with_threads(Threads::Fixed(4))
                .solve(&problem, &weighted)
                .unwrap();
            assert_eq!(parallel.threads(), 4);

            let parallel = parallel.into_solution().unwrap();
            assert_eq!(parallel.objective_value(), sequential.objective_value());
            assert_eq!(parallel.indices(), sequential.indices());
        }
    }

    #[test]
    fn test_workers_are_capped_by_first_elements() {
        let problem = ProblemBuilder::new(vec![1i64, 2, 3]).build().unwrap();
        let outcome = ExhaustiveSolver::new()
            .with_threads(Threads::Fixed(8))
            .solve(&problem, &sum)
            .unwrap();
        // Only one combination of the full pool exists.
        assert_eq!(outcome.threads(), 1);
        assert_eq!(outcome.evaluations(), 1);
    }

    #[test]
    fn test_objective_error_is_returned() {
        let problem = ProblemBuilder::new(vec![1i64, 2, 3, 4])
            .order(true)
            .selection_size(2)
            .build()
            .unwrap();
        let failing = Fallible(|s: &[i64]| {
            if s[0] == 3 {
                Err("bad selection".to_string())
            } else {
                Ok(s.iter().sum::<i64>())
            }
        });

        for threads in [Threads::Single, Threads::Fixed(2)] {
            let err = ExhaustiveSolver::new()
                .with_threads(threads)
                .solve(&problem, &failing)
                .unwrap_err();
            assert_eq!(err, "bad selection");
        }
    }

    #[test]
    fn test_display() {
        let problem = ProblemBuilder::new(vec![1i64, 2]).build().unwrap();
        let outcome = ExhaustiveSolver::new().solve(&problem, &sum).unwrap();
        let text = format!("{}", outcome);
        assert!(text.starts_with("ExhaustiveOutcome(objective: 3, evaluations: 1"));
    }
}
