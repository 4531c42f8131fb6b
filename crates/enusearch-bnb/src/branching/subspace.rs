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

use crate::{
    branching::{
        combination::CombinationSubspaceBuilder, permutation::PermutationSubspaceBuilder,
    },
    node::Position,
};
use enusearch_model::{
    index::CandidateIndex,
    problem::{Problem, SearchMode},
};

/// Enumerates the root positions of a search and the one-step children of
/// any position.
///
/// Children are appended to `out`; the builder never clears it. A position
/// that cannot branch further yields no children.
pub trait SubspaceBuilder {
    /// Returns the name of the subspace builder.
    fn name(&self) -> &str;

    /// Appends the root positions of the search to `out`.
    fn roots(&self, out: &mut Vec<Position>);

    /// Appends the one-step children of `position` to `out`.
    fn extend(&mut self, position: &[CandidateIndex], out: &mut Vec<Position>);
}

impl<B> SubspaceBuilder for &mut B
where
    B: SubspaceBuilder + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn roots(&self, out: &mut Vec<Position>) {
        (**self).roots(out)
    }

    #[inline]
    fn extend(&mut self, position: &[CandidateIndex], out: &mut Vec<Position>) {
        (**self).extend(position, out)
    }
}

impl std::fmt::Debug for dyn SubspaceBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubspaceBuilder({})", self.name())
    }
}

impl std::fmt::Display for dyn SubspaceBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubspaceBuilder({})", self.name())
    }
}

/// The subspace builder matching a problem's search mode.
#[derive(Clone, Debug)]
pub enum ModeSubspaceBuilder {
    Combination(CombinationSubspaceBuilder),
    Permutation(PermutationSubspaceBuilder),
}

impl ModeSubspaceBuilder {
    /// Builds the subspace builder for `problem`.
    pub fn from_problem<C>(problem: &Problem<C>) -> Self {
        match problem.mode() {
            SearchMode::Combination => {
                Self::Combination(CombinationSubspaceBuilder::from_problem(problem))
            }
            SearchMode::Permutation => {
                Self::Permutation(PermutationSubspaceBuilder::from_problem(problem))
            }
        }
    }

    /// Returns the search mode this builder serves.
    #[inline]
    pub fn mode(&self) -> SearchMode {
        match self {
            Self::Combination(_) => SearchMode::Combination,
            Self::Permutation(_) => SearchMode::Permutation,
        }
    }
}

impl SubspaceBuilder for ModeSubspaceBuilder {
    #[inline]
    fn name(&self) -> &str {
        match self {
            Self::Combination(builder) => builder.name(),
            Self::Permutation(builder) => builder.name(),
        }
    }

    #[inline]
    fn roots(&self, out: &mut Vec<Position>) {
        match self {
            Self::Combination(builder) => builder.roots(out),
            Self::Permutation(builder) => builder.roots(out),
        }
    }

    #[inline]
    fn extend(&mut self, position: &[CandidateIndex], out: &mut Vec<Position>) {
        match self {
            Self::Combination(builder) => builder.extend(position, out),
            Self::Permutation(builder) => builder.extend(position, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enusearch_model::problem::ProblemBuilder;

    fn indices(position: &Position) -> Vec<usize> {
        position.iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_mode_dispatch_combination() {
        let problem = ProblemBuilder::new(vec![1, 2, 3])
            .order(false)
            .selection_size(2)
            .build()
            .unwrap();
        let builder = ModeSubspaceBuilder::from_problem(&problem);
        assert_eq!(builder.mode(), SearchMode::Combination);
        assert_eq!(builder.name(), "CombinationSubspaceBuilder");

        let mut roots = Vec::new();
        builder.roots(&mut roots);
        assert_eq!(roots.len(), 1);
        assert_eq!(indices(&roots[0]), vec![0, 1, 2]);
    }

    #[test]
    fn test_mode_dispatch_permutation() {
        let problem = ProblemBuilder::new(vec![1, 2, 3])
            .order(true)
            .selection_size(2)
            .build()
            .unwrap();
        let mut builder = ModeSubspaceBuilder::from_problem(&problem);
        assert_eq!(builder.mode(), SearchMode::Permutation);
        assert_eq!(builder.name(), "PermutationSubspaceBuilder");

        let mut children = Vec::new();
        builder.extend(&[CandidateIndex::new(1)], &mut children);
        let got: Vec<Vec<usize>> = children.iter().map(indices).collect();
        assert_eq!(got, vec![vec![1, 0], vec![1, 2]]);
    }

    fn children_of<B>(mut builder: B, position: &[CandidateIndex], out: &mut Vec<Position>)
    where
        B: SubspaceBuilder,
    {
        builder.extend(position, out);
    }

    #[test]
    fn test_mut_ref_forwards_and_appends() {
        let problem = ProblemBuilder::new(vec!['a', 'b']).build().unwrap();
        let mut inner = ModeSubspaceBuilder::from_problem(&problem);

        let mut out = vec![Position::new()];
        children_of(
            &mut inner,
            &[CandidateIndex::new(0), CandidateIndex::new(1)],
            &mut out,
        );
        // The pre-existing entry is kept.
        assert_eq!(out.len(), 3);
        assert!(out[0].is_empty());
        assert_eq!(indices(&out[1]), vec![0]);
        assert_eq!(indices(&out[2]), vec![1]);
    }
}
