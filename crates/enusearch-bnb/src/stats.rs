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

use std::time::Duration;

/// Statistics collected during the execution of the Enusearch-BnB solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BnbSolverStatistics {
    /// Total nodes popped from the frontier.
    pub steps: u64,
    /// Total nodes popped and expanded.
    pub nodes_explored: u64,
    /// Total calls to the objective.
    pub evaluations: u64,
    /// Total child positions generated, roots included.
    pub branches_generated: u64,
    /// Expanded nodes that had no children.
    pub dead_ends: u64,
    /// Popped nodes that failed to beat the bound.
    pub prunings_bound: u64,
    /// Total times the incumbent was replaced.
    pub solutions_found: u64,
    /// The largest number of nodes pending at once.
    pub max_frontier_len: u64,
    /// The deepest level reached in the tree; the roots are at depth 0.
    pub max_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_branches_generated(&mut self, count: usize) {
        self.branches_generated = self.branches_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_dead_end(&mut self) {
        self.dead_ends = self.dead_ends.saturating_add(1);
    }

    /// Records a popped node that could not beat the bound.
    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_len_update(&mut self, len: usize) {
        self.max_frontier_len = self.max_frontier_len.max(len as u64);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_evaluations(&mut self, evaluations: u64) {
        self.evaluations = evaluations;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Enusearch-BnB Solver Statistics:")?;
        writeln!(f, "  Steps:                {}", self.steps)?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Evaluations:          {}", self.evaluations)?;
        writeln!(f, "  Branches generated:   {}", self.branches_generated)?;
        writeln!(f, "  Dead ends:            {}", self.dead_ends)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max frontier length:  {}", self.max_frontier_len)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_saturate_and_track_maxima() {
        let mut stats = BnbSolverStatistics {
            steps: u64::MAX,
            ..Default::default()
        };
        stats.on_step();
        assert_eq!(stats.steps, u64::MAX);

        stats.on_branches_generated(3);
        stats.on_branches_generated(4);
        assert_eq!(stats.branches_generated, 7);

        stats.on_frontier_len_update(5);
        stats.on_frontier_len_update(2);
        assert_eq!(stats.max_frontier_len, 5);

        stats.on_depth_update(3);
        stats.on_depth_update(1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_solution_found();
        stats.set_evaluations(42);
        let text = format!("{}", stats);
        assert!(text.contains("Evaluations:          42"));
        assert!(text.contains("Solutions found:      1"));
        assert_eq!(text.lines().count(), 11);
    }
}
