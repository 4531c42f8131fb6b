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

//! # Enusearch Model
//!
//! **The problem description shared by every enusearch solver.**
//!
//! This crate defines what is searched (a pool of candidates, the selection
//! size, whether order matters), how it is scored (an `Objective` adapter
//! around the caller's scoring function) and what comes back (`Solution`).
//! It carries no search logic; the branch-and-bound engine lives in
//! `enusearch_bnb` and the exhaustive reference solver in
//! `enusearch_exhaustive`.
//!
//! ## Architecture
//!
//! * **`index`**: `CandidateIndex`, the typed index used to address occurrences in the pool.
//! * **`problem`**: `Problem` (immutable, validated) and `ProblemBuilder` (mutable configuration),
//!   together with `SearchMode`, `ObjectiveSense`, `DuplicateHandling` and `Complexity`.
//! * **`objective`**: the `Objective` trait and adapters for plain and fallible closures.
//! * **`solution`**: the materialized result of a search.
//!
//! ## Design Philosophy
//!
//! 1.  **Indices, not values**: solvers never clone candidates while searching. A position is a
//!     sequence of `CandidateIndex`, so repeated candidates are told apart by their occurrence.
//! 2.  **Fail-Fast**: `ProblemBuilder::build` rejects unreachable selection sizes and empty
//!     pools up front instead of letting a solver run an empty search.

pub mod index;
pub mod objective;
pub mod problem;
pub mod solution;
