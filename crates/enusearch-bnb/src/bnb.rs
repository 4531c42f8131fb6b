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

//! Branch-and-bound solver over combinations and permutations.
//!
//! This module implements the search engine. The `BnbSolver` owns the
//! reusable buffers of a search (the frontier, the child batch and the
//! position scratch) and keeps their capacity across solves, so repeated
//! calls on problems of similar size do not allocate again. A search session
//! object encapsulates per-run state, statistics and timing.
//!
//! The loop pops the most promising node, stops as soon as that node cannot
//! beat the bound, and otherwise expands it into one batch of scored
//! children. A batch of complete positions is never pushed: its best node is
//! compared against the bound directly. Every other batch is merged into the
//! frontier, which is re-sorted so the next pop again yields the node with
//! the smallest internal value.

use crate::{
    branching::subspace::{ModeSubspaceBuilder, SubspaceBuilder},
    eval::generator::BranchGenerator,
    frontier::Frontier,
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::{Node, Position},
    result::{BnbSolverOutcome, BnbTerminationReason},
    seeding::{BoundSeeder, Unseeded},
    stats::BnbSolverStatistics,
};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::{
    objective::Objective,
    problem::{Problem, SearchMode},
    solution::Solution,
};

/// A best-first branch-and-bound solver for selection problems.
///
/// This is just the execution engine: the shape of the search tree comes from
/// the problem's `SearchMode`, and the quality of a position from the
/// `Objective` handed to `solve`.
#[derive(Clone, Debug)]
pub struct BnbSolver<T> {
    frontier: Frontier<T>,
    batch: Vec<Node<T>>,
    positions: Vec<Position>,
}

impl<T> Default for BnbSolver<T>
where
    T: ObjectiveValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: ObjectiveValue,
{
    /// Create a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            batch: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Create a new solver instance with preallocated storage for problems
    /// with the given pool and selection sizes.
    ///
    /// # Note
    ///
    /// The solver grows its buffers on demand either way. Preallocating only
    /// moves the cost of the first allocations to construction time.
    #[inline]
    pub fn preallocated(pool_size: usize, selection_size: usize) -> Self {
        Self {
            frontier: Frontier::preallocated(pool_size.saturating_mul(selection_size.max(1))),
            batch: Vec::with_capacity(pool_size),
            positions: Vec::with_capacity(pool_size),
        }
    }

    /// Solve `problem` for `objective`, starting with an unbounded incumbent.
    ///
    /// # Errors
    ///
    /// The first error returned by `objective` aborts the search and is
    /// returned unchanged. The monitor still sees `on_exit_search`.
    #[inline]
    pub fn solve<C, O, S>(
        &mut self,
        problem: &Problem<C>,
        objective: &mut O,
        monitor: S,
    ) -> Result<BnbSolverOutcome<C, T>, O::Error>
    where
        C: Clone,
        O: Objective<C, T> + ?Sized,
        S: TreeSearchMonitor<T>,
    {
        self.solve_with_seeder(problem, objective, monitor, Unseeded)
    }

    /// Solve `problem` for `objective`, asking `seeder` for an initial
    /// incumbent once the roots have been scored.
    ///
    /// # Errors
    ///
    /// The first error returned by `objective`, including during seeding,
    /// aborts the search and is returned unchanged.
    pub fn solve_with_seeder<C, O, S, D>(
        &mut self,
        problem: &Problem<C>,
        objective: &mut O,
        mut monitor: S,
        mut seeder: D,
    ) -> Result<BnbSolverOutcome<C, T>, O::Error>
    where
        C: Clone,
        O: Objective<C, T> + ?Sized,
        S: TreeSearchMonitor<T>,
        D: BoundSeeder<C, T>,
    {
        let session =
            BnbSolverSearchSession::new(self, problem, objective, &mut monitor, &mut seeder);
        let res = session.run();
        self.reset();
        res
    }

    /// Reset the internal state of the solver.
    ///
    /// # Note
    ///
    /// This does not deallocate any memory, it only clears the buffers.
    #[inline]
    fn reset(&mut self) {
        self.frontier.reset();
        self.batch.clear();
        self.positions.clear();
    }
}

/// A search session of the solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, C, T, O, S, D>
where
    T: ObjectiveValue,
    O: ?Sized,
{
    solver: &'a mut BnbSolver<T>,
    problem: &'a Problem<C>,
    objective: &'a mut O,
    monitor: &'a mut S,
    seeder: &'a mut D,
    builder: ModeSubspaceBuilder,
    generator: BranchGenerator<C>,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, C, T, O, S, D> std::fmt::Debug for BnbSolverSearchSession<'a, C, T, O, S, D>
where
    T: ObjectiveValue,
    O: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("shape", &self.problem.shape())
            .field("frontier", &self.solver.frontier.len())
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, C, T, O, S, D> BnbSolverSearchSession<'a, C, T, O, S, D>
where
    C: Clone,
    T: ObjectiveValue,
    O: Objective<C, T> + ?Sized,
    S: TreeSearchMonitor<T>,
    D: BoundSeeder<C, T>,
{
    /// Create a new search session.
    #[inline]
    fn new(
        solver: &'a mut BnbSolver<T>,
        problem: &'a Problem<C>,
        objective: &'a mut O,
        monitor: &'a mut S,
        seeder: &'a mut D,
    ) -> Self {
        Self {
            solver,
            problem,
            objective,
            monitor,
            seeder,
            builder: ModeSubspaceBuilder::from_problem(problem),
            generator: BranchGenerator::preallocated(problem.pool_size()),
            incumbent: Incumbent::new(),
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    fn run(mut self) -> Result<BnbSolverOutcome<C, T>, O::Error> {
        self.monitor
            .on_enter_search(&self.problem.shape(), &self.stats);

        let searched = self.search();

        self.stats.set_evaluations(self.generator.evaluations());
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        let termination_reason = searched?;
        Ok(self.finalize_result(termination_reason))
    }

    /// The main loop. Returns why the search ended.
    fn search(&mut self) -> Result<BnbTerminationReason, O::Error> {
        self.initialize()?;

        let termination_reason = loop {
            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break BnbTerminationReason::Aborted(msg);
            }

            let node = match self.solver.frontier.pop() {
                Some(node) => node,
                None => break BnbTerminationReason::FrontierExhausted,
            };

            self.stats.on_step();
            self.monitor.on_step(&node, &self.stats);

            // The frontier is sorted, so nothing below this node can do better.
            if !self.incumbent.bound().admits(node.value()) {
                self.stats.on_pruning_bound();
                self.monitor
                    .on_prune(&node, PruneReason::BoundDominated, &self.stats);
                break BnbTerminationReason::BoundDominated;
            }

            self.expand(&node)?;
        };

        Ok(termination_reason)
    }

    /// Initialize the search session.
    ///
    /// Makes sure the frontier has room for the first levels, scores the
    /// roots, consults the seeder and hands the roots to `handle_batch`.
    fn initialize(&mut self) -> Result<(), O::Error> {
        let pool_size = self.problem.pool_size();
        self.solver.frontier.ensure_capacity(pool_size);

        self.solver.positions.clear();
        self.builder.roots(&mut self.solver.positions);
        self.stats
            .on_branches_generated(self.solver.positions.len());

        self.generator.generate(
            self.problem,
            &mut *self.objective,
            &mut self.solver.positions,
            &mut self.solver.batch,
        )?;

        if !self.is_complete_batch() {
            let seeded = self.seeder.seed(
                self.problem,
                &mut self.builder,
                &mut self.generator,
                &mut *self.objective,
                &self.solver.batch,
            )?;

            if let Some(node) = seeded {
                debug_assert!(
                    node.len() == self.problem.selection_size(),
                    "called `BnbSolverSearchSession::initialize` with a seeder that returned a node of length {}, expected {}",
                    node.len(),
                    self.problem.selection_size()
                );
                self.install(&node);
            }
        }

        self.handle_batch();
        Ok(())
    }

    /// Expand `node` into its children and handle the resulting batch.
    fn expand(&mut self, node: &Node<T>) -> Result<(), O::Error> {
        self.stats.on_node_explored();

        self.solver.positions.clear();
        self.builder
            .extend(node.position(), &mut self.solver.positions);

        let count = self.solver.positions.len();
        self.stats.on_branches_generated(count);

        if count == 0 {
            self.stats.on_dead_end();
            self.monitor.on_prune(node, PruneReason::DeadEnd, &self.stats);
            return Ok(());
        }

        self.generator.generate(
            self.problem,
            &mut *self.objective,
            &mut self.solver.positions,
            &mut self.solver.batch,
        )?;
        self.monitor.on_branches_generated(node, count, &self.stats);

        self.handle_batch();
        Ok(())
    }

    /// Returns `true` if the pending batch holds positions of selection size.
    /// All nodes of a batch have the same length.
    #[inline]
    fn is_complete_batch(&self) -> bool {
        self.solver
            .batch
            .first()
            .is_some_and(|node| node.len() == self.problem.selection_size())
    }

    /// Consume the pending batch: a complete batch competes for the
    /// incumbent with its best node, any other batch joins the frontier.
    fn handle_batch(&mut self) {
        let Some(first) = self.solver.batch.first() else {
            return;
        };
        let depth = self.depth_of(first.len());
        self.stats.on_depth_update(depth);

        if self.is_complete_batch() {
            if let Some(best) = self.solver.batch.pop() {
                self.install(&best);
            }
            self.solver.batch.clear();
        } else {
            self.solver.frontier.extend_sorted(&mut self.solver.batch);
            self.stats
                .on_frontier_len_update(self.solver.frontier.len());
        }
    }

    /// Install `node` as the incumbent if it beats the bound.
    #[inline]
    fn install(&mut self, node: &Node<T>) {
        if self.incumbent.try_install(node) {
            self.stats.on_solution_found();
            let objective_value = self.problem.sense().externalize(node.value());
            self.monitor
                .on_solution_found(node, objective_value, &self.stats);
        }
    }

    /// The level of a position of length `len`; the roots are at depth 0.
    #[inline]
    fn depth_of(&self, len: usize) -> u64 {
        let depth = match self.problem.mode() {
            SearchMode::Permutation => len.saturating_sub(1),
            SearchMode::Combination => self.problem.pool_size().saturating_sub(len),
        };
        depth as u64
    }

    /// Finalize the solver result based on the incumbent
    /// and the termination reason.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize_result(self, reason: BnbTerminationReason) -> BnbSolverOutcome<C, T> {
        tracing::debug!(
            objective = self.objective.name(),
            reason = %reason,
            steps = self.stats.steps,
            evaluations = self.stats.evaluations,
            incumbent = %self.incumbent,
            "search session finished"
        );

        let problem = self.problem;
        let solution = self.incumbent.into_parts().map(|(value, position)| {
            Solution::new(
                problem.sense().externalize(value),
                problem.materialize(&position),
                position.into_vec(),
            )
        });

        match (reason, solution) {
            (BnbTerminationReason::Aborted(msg), solution) => {
                BnbSolverOutcome::aborted(solution, msg, self.stats)
            }
            (reason, Some(solution)) => BnbSolverOutcome::optimal(solution, reason, self.stats),
            (reason, None) => BnbSolverOutcome::no_solution(reason, self.stats),
        }
    }
}
