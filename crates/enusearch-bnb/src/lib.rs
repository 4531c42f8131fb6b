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

//! Enusearch-BnB: best-first branch-and-bound over selections
//!
//! Searches the combinations or permutations of a candidate pool for the one
//! that optimizes a caller-supplied objective, without scoring every
//! possibility. The traversal follows Narendra and Fukunaga (1977): a frontier
//! kept sorted by internal value is consumed as a stack, so the solver always
//! descends into the most promising and most recently generated node, and the
//! whole search stops as soon as that node fails to beat the bound.
//!
//! Core flow
//! - Build an `enusearch_model::problem::Problem<C>`.
//! - Supply an `enusearch_model::objective::Objective<C, T>` (any closure works).
//! - Optionally choose a `seeding::BoundSeeder` and monitors.
//! - Run `bnb::BnbSolver`; inspect the `result::BnbSolverOutcome`.
//!
//! Assumptions and guarantees
//! - The internal value (`sign * objective`) must not decrease from a position
//!   to any of its children. Pruning is exact only under this precondition; use
//!   `eval::validation::is_monotone_exhaustive` to check small instances.
//! - Deterministic given a deterministic objective: ties keep generation order.
//! - Strictly single-threaded; an objective error aborts the search.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `branching`: subspace builders (one-step extensions and reductions).
//! - `eval`: branch generation and monotonicity validation.
//! - `frontier`: the sorted LIFO of pending nodes.
//! - `incumbent`: the running bound and best complete position.
//! - `monitor`: tree-search monitors (log, composite, limits).
//! - `node`: scored positions.
//! - `result`: solver outcomes with termination reasons.
//! - `seeding`: initial bound strategies.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod branching;
pub mod eval;
pub mod frontier;
pub mod incumbent;
pub mod monitor;
pub mod node;
pub mod result;
pub mod seeding;
pub mod stats;

#[cfg(test)]
mod test_support;
