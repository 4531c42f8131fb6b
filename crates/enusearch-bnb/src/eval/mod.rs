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

//! Evaluation utilities for branch-and-bound
//!
//! Turns positions into scored nodes and checks the precondition the pruning
//! relies on.
//!
//! Monotonicity requirement:
//! - The internal value (`sign * objective`) of a position must never exceed
//!   the internal value of any of its children. For a maximized objective this
//!   means scores must not grow as positions grow (order mode) or shrink
//!   (combination mode); for a minimized objective the reverse.
//! - The solver terminates as soon as the most promising pending node fails
//!   to beat the bound. With a non-monotone objective a better complete
//!   position can hide below such a node, and the optimum may be missed.
//!   Use `validation::is_monotone_exhaustive` to check custom objectives on
//!   small instances.
//!
//! Submodules:
//! - `generator`: the `BranchGenerator`, scoring and ordering batches of
//!   positions.
//! - `validation`: utilities to check objective monotonicity.

pub mod generator;
pub mod validation;
