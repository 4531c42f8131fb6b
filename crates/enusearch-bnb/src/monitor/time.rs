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

//! Time limit monitor for tree search
//!
//! `TimeLimitMonitor` implements `TreeSearchMonitor` and enforces a wall-clock
//! time budget for the search. It resets its clock at the start, checks
//! elapsed time at masked step intervals to minimize overhead, and signals
//! termination when the configured limit is reached.
//!
//! Construct with `new(limit)` or `with_clock_check_mask(limit, mask)` to
//! tune how frequently the clock is checked versus search throughput. Each
//! step scores a whole batch of children, so the default mask is much
//! smaller than for per-decision solvers.

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::Node,
    stats::BnbSolverStatistics,
};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::problem::ProblemShape;
use std::time::{Duration, Instant};

/// A tree search monitor that enforces a time limit on the search process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// Checks the clock every 64 steps.
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3F;

    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_STEP_CLOCK_CHECK_MASK)
    }

    /// Creates a new `TimeLimitMonitor` with the specified time limit and clock check mask.
    pub fn with_clock_check_mask(time_limit: Duration, mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask: mask,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured time limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> TreeSearchMonitor<T> for TimeLimitMonitor<T>
where
    T: ObjectiveValue,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _shape: &ProblemShape, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
    }

    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        if (statistics.steps & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit exceeded".to_string());
        }
        SearchCommand::Continue
    }

    fn on_step(&mut self, _node: &Node<T>, _statistics: &BnbSolverStatistics) {}

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
        _objective_value: T,
        _statistics: &BnbSolverStatistics,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_terminates_on_checked_steps_only() {
        let mut monitor = TimeLimitMonitor::<i64>::with_clock_check_mask(Duration::ZERO, 0x3);
        let mut stats = BnbSolverStatistics::default();

        assert!(matches!(
            monitor.search_command(&stats),
            SearchCommand::Terminate(_)
        ));

        stats.steps = 1;
        assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);

        stats.steps = 4;
        assert_eq!(
            monitor.search_command(&stats),
            SearchCommand::Terminate("time limit exceeded".to_string())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut monitor = TimeLimitMonitor::<i64>::new(Duration::from_secs(3600));
        assert_eq!(monitor.time_limit(), Duration::from_secs(3600));
        let stats = BnbSolverStatistics::default();
        assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);
    }
}
