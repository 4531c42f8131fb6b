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

//! Initial bounds for branch-and-bound
//!
//! A `BoundSeeder` runs once, after the roots have been scored and before the
//! main loop pops its first node. Whatever complete node it returns becomes
//! the initial incumbent, so the search starts with a finite bound and prunes
//! from the first step on. A seeder never affects exactness: the incumbent is
//! still replaced by any strictly better complete position found later.
//!
//! - `Unseeded` leaves the bound at infinity. This is the default.
//! - `GreedyDive` follows the best-valued child from level to level until the
//!   selection size is reached.

use crate::{
    branching::subspace::SubspaceBuilder,
    eval::generator::BranchGenerator,
    node::{Node, Position},
};
use enusearch_core::num::{ObjectiveValue, compare_values};
use enusearch_model::{objective::Objective, problem::Problem};

/// Produces an initial incumbent for a search.
pub trait BoundSeeder<C, T>
where
    T: ObjectiveValue,
{
    /// Returns the name of the seeder.
    fn name(&self) -> &str;

    /// Returns a complete node to install as the initial incumbent, or `None`
    /// to start unbounded. `roots` is the scored root batch.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged.
    fn seed<O, B>(
        &mut self,
        problem: &Problem<C>,
        builder: &mut B,
        generator: &mut BranchGenerator<C>,
        objective: &mut O,
        roots: &[Node<T>],
    ) -> Result<Option<Node<T>>, O::Error>
    where
        O: Objective<C, T> + ?Sized,
        B: SubspaceBuilder + ?Sized;
}

impl<C, T, D> BoundSeeder<C, T> for &mut D
where
    T: ObjectiveValue,
    D: BoundSeeder<C, T> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn seed<O, B>(
        &mut self,
        problem: &Problem<C>,
        builder: &mut B,
        generator: &mut BranchGenerator<C>,
        objective: &mut O,
        roots: &[Node<T>],
    ) -> Result<Option<Node<T>>, O::Error>
    where
        O: Objective<C, T> + ?Sized,
        B: SubspaceBuilder + ?Sized,
    {
        (**self).seed(problem, builder, generator, objective, roots)
    }
}

/// Starts every search with an unbounded incumbent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unseeded;

impl<C, T> BoundSeeder<C, T> for Unseeded
where
    T: ObjectiveValue,
{
    fn name(&self) -> &str {
        "Unseeded"
    }

    #[inline]
    fn seed<O, B>(
        &mut self,
        _problem: &Problem<C>,
        _builder: &mut B,
        _generator: &mut BranchGenerator<C>,
        _objective: &mut O,
        _roots: &[Node<T>],
    ) -> Result<Option<Node<T>>, O::Error>
    where
        O: Objective<C, T> + ?Sized,
        B: SubspaceBuilder + ?Sized,
    {
        Ok(None)
    }
}

impl std::fmt::Display for Unseeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unseeded")
    }
}

/// Dives greedily from the best root: at every level the children of the
/// current node are scored and the best one is followed, until a node of
/// selection size is reached. Among equally valued nodes the first one
/// generated is followed.
///
/// Returns `None` if the dive hits a node without children.
#[derive(Debug, Clone, Default)]
pub struct GreedyDive {
    positions: Vec<Position>,
}

impl GreedyDive {
    /// Creates a new `GreedyDive` seeder.
    #[inline]
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }
}

impl std::fmt::Display for GreedyDive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GreedyDive")
    }
}

/// The first node with the smallest internal value.
#[inline]
fn first_minimum<T>(nodes: &[Node<T>]) -> Option<&Node<T>>
where
    T: ObjectiveValue,
{
    nodes
        .iter()
        .min_by(|a, b| compare_values(a.value(), b.value()))
}

impl<C, T> BoundSeeder<C, T> for GreedyDive
where
    C: Clone,
    T: ObjectiveValue,
{
    fn name(&self) -> &str {
        "GreedyDive"
    }

    fn seed<O, B>(
        &mut self,
        problem: &Problem<C>,
        builder: &mut B,
        generator: &mut BranchGenerator<C>,
        objective: &mut O,
        roots: &[Node<T>],
    ) -> Result<Option<Node<T>>, O::Error>
    where
        O: Objective<C, T> + ?Sized,
        B: SubspaceBuilder + ?Sized,
    {
        let target = problem.selection_size();
        let mut current = match first_minimum(roots) {
            Some(node) => node.clone(),
            None => return Ok(None),
        };

        let mut children: Vec<Node<T>> = Vec::new();
        while current.len() != target {
            self.positions.clear();
            builder.extend(current.position(), &mut self.positions);
            generator.generate(problem, objective, &mut self.positions, &mut children)?;

            current = match first_minimum(&children) {
                Some(node) => node.clone(),
                None => return Ok(None),
            };
        }

        Ok(Some(current))
    }
}
