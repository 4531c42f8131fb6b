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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `PruneReason` and `SearchCommand`
//! for observing and controlling branch-and-bound. Callbacks track the solver
//! lifecycle, and a monitor can stop the run via `SearchCommand` (default:
//! Continue).
//!
//! Lifecycle highlights
//! - enter → {command → step → prune | branches generated → solution} → exit
//! - `BnbSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.
//! - Generic over `T: ObjectiveValue` (objective type) but not over the
//!   candidate type: monitors see nodes, internal values and the problem
//!   shape, never candidates.

use crate::{node::Node, stats::BnbSolverStatistics};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::problem::ProblemShape;

/// Reasons for discarding a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The node could not beat the bound. This ends the search.
    BoundDominated,
    /// The node was expanded but has no children.
    DeadEnd,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
            PruneReason::DeadEnd => write!(f, "DeadEnd"),
        }
    }
}

/// The action a monitor requests from the search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop the search. The string describes why.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate({})", reason),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, shape: &ProblemShape, statistics: &BnbSolverStatistics);
    /// Called when the search ends, also when it ends with an objective error.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics);
    /// Called before every step to determine the next action of the search.
    fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called for every node popped from the frontier.
    fn on_step(&mut self, node: &Node<T>, statistics: &BnbSolverStatistics);
    /// Called when a node is discarded.
    fn on_prune(&mut self, node: &Node<T>, reason: PruneReason, statistics: &BnbSolverStatistics);
    /// Called when a node was expanded into `count` scored children.
    fn on_branches_generated(
        &mut self,
        parent: &Node<T>,
        count: usize,
        statistics: &BnbSolverStatistics,
    );
    /// Called when a complete position becomes the new incumbent.
    /// `objective_value` is in the caller's terms, `node.value()` is internal.
    fn on_solution_found(
        &mut self,
        node: &Node<T>,
        objective_value: T,
        statistics: &BnbSolverStatistics,
    );
}

impl<T, M> TreeSearchMonitor<T> for &mut M
where
    T: ObjectiveValue,
    M: TreeSearchMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, shape: &ProblemShape, statistics: &BnbSolverStatistics) {
        (**self).on_enter_search(shape, statistics)
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }

    #[inline(always)]
    fn on_step(&mut self, node: &Node<T>, statistics: &BnbSolverStatistics) {
        (**self).on_step(node, statistics)
    }

    #[inline(always)]
    fn on_prune(&mut self, node: &Node<T>, reason: PruneReason, statistics: &BnbSolverStatistics) {
        (**self).on_prune(node, reason, statistics)
    }

    #[inline(always)]
    fn on_branches_generated(
        &mut self,
        parent: &Node<T>,
        count: usize,
        statistics: &BnbSolverStatistics,
    ) {
        (**self).on_branches_generated(parent, count, statistics)
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        node: &Node<T>,
        objective_value: T,
        statistics: &BnbSolverStatistics,
    ) {
        (**self).on_solution_found(node, objective_value, statistics)
    }
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
