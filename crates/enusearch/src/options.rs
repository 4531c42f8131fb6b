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

use enusearch_model::problem::{
    DuplicateHandling, ObjectiveSense, Problem, ProblemBuilder, ProblemError, SearchMode,
};

/// Configuration shared by every solve entry point.
///
/// Defaults: combinations, minimization, the whole pool as selection size,
/// quiet, a single job, no warm start and duplicates preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    order: bool,
    minimize: bool,
    selection_size: Option<usize>,
    verbose: bool,
    n_jobs: isize,
    warm_start: bool,
    duplicate_handling: DuplicateHandling,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveOptions {
    /// Creates the default options.
    #[inline]
    pub fn new() -> Self {
        Self {
            order: false,
            minimize: true,
            selection_size: None,
            verbose: false,
            n_jobs: 1,
            warm_start: false,
            duplicate_handling: DuplicateHandling::Preserve,
        }
    }

    /// Search permutations (`true`) or combinations (`false`).
    #[inline]
    pub fn order(mut self, order: bool) -> Self {
        self.order = order;
        self
    }

    /// Minimize (`true`) or maximize (`false`) the objective.
    #[inline]
    pub fn minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// Number of candidates in a solution.
    #[inline]
    pub fn selection_size(mut self, selection_size: usize) -> Self {
        self.selection_size = Some(selection_size);
        self
    }

    /// Report progress and a final summary through `tracing` at `INFO`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Worker count for the exhaustive search: `-1` for all CPUs, `-2` for
    /// all but one, `0` or `1` for the calling thread only.
    #[inline]
    pub fn n_jobs(mut self, n_jobs: isize) -> Self {
        self.n_jobs = n_jobs;
        self
    }

    /// Seed branch-and-bound with a greedy dive before the main loop.
    #[inline]
    pub fn warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }

    /// Whether branch-and-bound expands value-identical siblings once or
    /// every time.
    #[inline]
    pub fn duplicate_handling(mut self, duplicate_handling: DuplicateHandling) -> Self {
        self.duplicate_handling = duplicate_handling;
        self
    }

    /// Returns the search mode selected by `order`.
    #[inline]
    pub fn search_mode(&self) -> SearchMode {
        SearchMode::from_order(self.order)
    }

    /// Returns the objective sense selected by `minimize`.
    #[inline]
    pub fn objective_sense(&self) -> ObjectiveSense {
        ObjectiveSense::from_minimize(self.minimize)
    }

    /// The requested selection size, `None` for the whole pool.
    #[inline]
    pub fn target_size(&self) -> Option<usize> {
        self.selection_size
    }

    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    #[inline]
    pub fn jobs(&self) -> isize {
        self.n_jobs
    }

    #[inline]
    pub fn is_warm_start(&self) -> bool {
        self.warm_start
    }

    #[inline]
    pub fn duplicates(&self) -> DuplicateHandling {
        self.duplicate_handling
    }

    /// Builds and validates the problem these options describe.
    ///
    /// # Errors
    ///
    /// Returns a `ProblemError` for an empty pool or an unusable selection
    /// size.
    pub fn build_problem<C, I>(&self, candidates: I) -> Result<Problem<C>, ProblemError>
    where
        C: PartialEq,
        I: IntoIterator<Item = C>,
    {
        ProblemBuilder::new(candidates)
            .mode(self.search_mode())
            .sense(self.objective_sense())
            .maybe_selection_size(self.selection_size)
            .duplicate_handling(self.duplicate_handling)
            .build()
    }
}

impl std::fmt::Display for SolveOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let selection_size = match self.selection_size {
            Some(size) => size.to_string(),
            None => "pool".to_string(),
        };
        write!(
            f,
            "SolveOptions(mode: {}, sense: {}, selection_size: {}, verbose: {}, n_jobs: {})",
            self.search_mode(),
            self.objective_sense(),
            selection_size,
            self.verbose,
            self.n_jobs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SolveOptions::default();
        assert_eq!(options.search_mode(), SearchMode::Combination);
        assert_eq!(options.objective_sense(), ObjectiveSense::Minimize);
        assert_eq!(options.target_size(), None);
        assert!(!options.is_verbose());
        assert_eq!(options.jobs(), 1);
        assert!(!options.is_warm_start());
        assert_eq!(options.duplicates(), DuplicateHandling::Preserve);
    }

    #[test]
    fn test_build_problem_applies_every_option() {
        let problem = SolveOptions::new()
            .order(true)
            .minimize(false)
            .selection_size(2)
            .duplicate_handling(DuplicateHandling::Collapse)
            .build_problem(vec![1, 2, 3])
            .unwrap();

        assert_eq!(problem.mode(), SearchMode::Permutation);
        assert_eq!(problem.sense(), ObjectiveSense::Maximize);
        assert_eq!(problem.selection_size(), 2);
        assert_eq!(problem.duplicate_handling(), DuplicateHandling::Collapse);
    }

    #[test]
    fn test_build_problem_defaults_to_the_whole_pool() {
        let problem = SolveOptions::new().build_problem(vec!['x', 'y']).unwrap();
        assert_eq!(problem.selection_size(), 2);
    }

    #[test]
    fn test_build_problem_rejects_oversized_selection() {
        let err = SolveOptions::new()
            .selection_size(4)
            .build_problem(vec![1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            ProblemError::SelectionSizeExceedsPool {
                selection_size: 4,
                pool_size: 3
            }
        );
    }
}
