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

//! Progress reporting for tree search
//!
//! `LogTreeSearchMonitor` emits `tracing` events at `INFO` level: one when the
//! search starts, one every `log_interval` steps with the iteration count,
//! the elapsed time and the best objective value found so far, and a summary
//! with the evaluation count, the share of the branching tree that was scored
//! and the duration when the search ends.
//!
//! Nothing is printed unless the caller installs a `tracing` subscriber.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::Node,
    stats::BnbSolverStatistics,
};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::problem::{Complexity, ProblemShape};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    log_interval: u64,
    best_objective: Option<T>,
    complexity: Option<Complexity>,
    progress_reports: u64,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    /// Default number of steps between two progress events.
    pub const DEFAULT_LOG_INTERVAL: u64 = 1000;

    /// Creates a monitor that reports every `log_interval` steps.
    ///
    /// # Panics
    ///
    /// Panics if `log_interval` is zero.
    pub fn new(log_interval: u64) -> Self {
        assert!(
            log_interval > 0,
            "called `LogTreeSearchMonitor::new` with a zero log interval"
        );

        Self {
            start_time: Instant::now(),
            log_interval,
            best_objective: None,
            complexity: None,
            progress_reports: 0,
        }
    }

    /// Returns the number of steps between two progress events.
    #[inline]
    pub fn log_interval(&self) -> u64 {
        self.log_interval
    }

    /// Returns the best objective value reported so far.
    #[inline]
    pub fn best_objective(&self) -> Option<T> {
        self.best_objective
    }

    /// Returns the number of progress events emitted since the search started.
    #[inline]
    pub fn progress_reports(&self) -> u64 {
        self.progress_reports
    }

    #[inline(always)]
    fn coverage_field(&self, evaluations: u64) -> String {
        match self.complexity.and_then(|c| c.coverage(evaluations)) {
            Some(percent) => format!("{:.2}%", percent),
            None => "n/a".to_string(),
        }
    }

    #[inline(always)]
    fn best_objective_field(&self) -> String {
        match self.best_objective {
            Some(value) => format!("{}", value),
            None => "Inf".to_string(),
        }
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOG_INTERVAL)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogTreeSearchMonitor(log_interval: {})", self.log_interval)
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, shape: &ProblemShape, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
        self.best_objective = None;
        self.progress_reports = 0;
        let complexity = shape.complexity();
        self.complexity = Some(complexity);
        tracing::info!(
            pool_size = shape.pool_size,
            selection_size = shape.selection_size,
            mode = %shape.mode,
            sense = %shape.sense,
            tree_size = %complexity,
            "search started"
        );
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        tracing::info!(
            iterations = statistics.steps,
            evaluations = statistics.evaluations,
            coverage = %self.coverage_field(statistics.evaluations),
            duration_secs = statistics.time_total.as_secs_f64(),
            best = %self.best_objective_field(),
            "search finished"
        );
    }

    fn on_step(&mut self, _node: &Node<T>, statistics: &BnbSolverStatistics) {
        if statistics.steps % self.log_interval == 0 {
            self.progress_reports += 1;
            tracing::info!(
                iteration = statistics.steps,
                elapsed_secs = self.start_time.elapsed().as_secs_f64(),
                best = %self.best_objective_field(),
                "search progress"
            );
        }
    }

    fn on_prune(&mut self, _node: &Node<T>, _reason: PruneReason, _statistics: &BnbSolverStatistics) {
    }

    fn on_branches_generated(
        &mut self,
        _parent: &Node<T>,
        _count: usize,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    fn on_solution_found(
        &mut self,
        _node: &Node<T>,
        objective_value: T,
        _statistics: &BnbSolverStatistics,
    ) {
        self.best_objective = Some(objective_value);
    }
}
