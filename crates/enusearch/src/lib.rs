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

//! # Enusearch
//!
//! Finds the combination or permutation of a candidate pool that optimizes
//! an objective. Two strategies share one configuration:
//!
//! - `branch_and_bound`: best-first branch-and-bound. Scores far fewer
//!   selections, but is exact only for objectives whose (sign-adjusted)
//!   value never improves along a branch.
//! - `exhaustive`: scores every selection, optionally on several threads.
//!   Exact for any objective.
//!
//! ## Example
//!
//! ```
//! use enusearch::{branch_and_bound, options::SolveOptions};
//!
//! let options = SolveOptions::new().minimize(false).selection_size(5);
//! let sum = |x: &[i64]| x.iter().sum::<i64>();
//! let solution = branch_and_bound::solve(sum, vec![2, 4, 5, 6, 3, 1, 7], &options).unwrap();
//! assert_eq!(solution.objective_value(), 25);
//! ```
//!
//! ## Modules
//!
//! - `options`: `SolveOptions`, the builder-style configuration.
//! - `error`: `SolveError`, covering configuration, objective and empty
//!   results.

pub mod branch_and_bound;
pub mod error;
pub mod exhaustive;
pub mod options;

pub use enusearch_model::objective::{Fallible, Named, Objective};
pub use enusearch_model::solution::Solution;
