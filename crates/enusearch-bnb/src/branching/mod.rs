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

//! Subspace builders for branch-and-bound
//!
//! A subspace builder enumerates the one-step neighbours of a position: the
//! positions it branches into. Two schemes are provided, one per search mode:
//!
//! - `permutation`: order mode. Positions grow by appending one unused
//!   occurrence; the roots are the singletons.
//! - `combination`: combination mode. Positions shrink by dropping one
//!   element; the single root is the full pool.
//!
//! `subspace` declares the `SubspaceBuilder` trait and `ModeSubspaceBuilder`,
//! which picks the scheme from the problem's `SearchMode`.
//!
//! Builders are deterministic. Children are emitted in a fixed order, which
//! becomes the tie order of equally valued nodes on the frontier.

pub mod combination;
pub mod permutation;
pub mod subspace;
