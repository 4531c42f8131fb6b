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

//! Problem definition for enumerative search.
//!
//! A `Problem` fixes everything a solver needs to know before it starts: the
//! candidate pool, how many candidates make up a complete position, whether
//! the arrangement order is significant and in which direction the objective
//! is optimized. It is produced by `ProblemBuilder`, which validates the
//! configuration eagerly so that solvers never run a search that cannot
//! produce a complete position.
//!
//! Candidates may repeat. Every occurrence is addressed by its own
//! `CandidateIndex`, which gives multiset semantics for free: an occurrence
//! is either used by a position or still available. At build time the pool
//! is additionally partitioned into value classes (occurrences that compare
//! equal), which solvers use when `DuplicateHandling::Collapse` is requested.

use crate::index::CandidateIndex;
use enusearch_core::num::ObjectiveValue;

/// Whether the order of selected candidates is significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// Search unordered selections. Positions shrink by one per branching
    /// step, starting from the full pool.
    #[default]
    Combination,
    /// Search ordered arrangements. Positions grow by one per branching
    /// step, starting from single candidates.
    Permutation,
}

impl SearchMode {
    /// Maps the classic `order` flag onto a mode.
    #[inline]
    pub fn from_order(order: bool) -> Self {
        if order {
            SearchMode::Permutation
        } else {
            SearchMode::Combination
        }
    }

    /// Returns `true` if the arrangement order matters.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        matches!(self, SearchMode::Permutation)
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Combination => write!(f, "Combination"),
            SearchMode::Permutation => write!(f, "Permutation"),
        }
    }
}

/// Direction in which the objective is optimized.
///
/// Solvers always minimize an *internal* value, `sign * objective`, where the
/// sign is `+1` for minimization and `-1` for maximization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

impl ObjectiveSense {
    /// Maps the classic `minimize` flag onto a sense.
    #[inline]
    pub fn from_minimize(minimize: bool) -> Self {
        if minimize {
            ObjectiveSense::Minimize
        } else {
            ObjectiveSense::Maximize
        }
    }

    /// Returns the sign applied to objective values: `1` or `-1`.
    #[inline]
    pub fn sign<T>(&self) -> T
    where
        T: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Minimize => T::one(),
            ObjectiveSense::Maximize => -T::one(),
        }
    }

    /// Converts an objective value into the internal, always-minimized value.
    #[inline(always)]
    pub fn internalize<T>(&self, value: T) -> T
    where
        T: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Minimize => value,
            ObjectiveSense::Maximize => -value,
        }
    }

    /// Converts an internal value back into the caller's objective terms.
    #[inline(always)]
    pub fn externalize<T>(&self, internal: T) -> T
    where
        T: ObjectiveValue,
    {
        // Negation is its own inverse.
        self.internalize(internal)
    }
}

impl std::fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveSense::Minimize => write!(f, "Minimize"),
            ObjectiveSense::Maximize => write!(f, "Maximize"),
        }
    }
}

/// How branching treats sibling positions that are equal by value.
///
/// With repeated candidates, different occurrences can produce positions
/// that hold the same values (dropping either copy of a duplicate, or
/// appending either copy). `Preserve` enumerates and scores all of them;
/// `Collapse` keeps only the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicateHandling {
    #[default]
    Preserve,
    Collapse,
}

impl std::fmt::Display for DuplicateHandling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateHandling::Preserve => write!(f, "Preserve"),
            DuplicateHandling::Collapse => write!(f, "Collapse"),
        }
    }
}

/// The error type for invalid problem configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The candidate pool is empty.
    EmptyPool,
    /// A selection size of zero was requested.
    ZeroSelectionSize,
    /// The selection size cannot be reached with the given pool.
    SelectionSizeExceedsPool {
        selection_size: usize,
        pool_size: usize,
    },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "The candidate pool must not be empty"),
            Self::ZeroSelectionSize => write!(f, "The selection size must be positive"),
            Self::SelectionSizeExceedsPool {
                selection_size,
                pool_size,
            } => write!(
                f,
                "The selection size {} exceeds the pool size {}",
                selection_size, pool_size
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// Represents the size of the branching tree of a problem.
///
/// This is the number of positions a traversal that never prunes would score:
/// * Permutation mode: $\sum_{j=1}^{k} P(n, j)$ (every prefix up to length $k$).
/// * Combination mode: $\sum_{d=0}^{n-k} P(n, d)$ (drop-one branching without
///   collapsing duplicate subsets, from the full pool down to size $k$).
///
/// These numbers overflow integers quickly, so the value is kept in
/// **Logarithmic Space** ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity of the branching tree for the given shape.
    pub fn new(mode: SearchMode, pool_size: usize, selection_size: usize) -> Self {
        let (first, last) = match mode {
            SearchMode::Permutation => (1, selection_size),
            SearchMode::Combination => (0, pool_size.saturating_sub(selection_size)),
        };

        // Helper to compute log10(10^a + 10^b)
        let log10_add = |a: f64, b: f64| -> f64 {
            let max = a.max(b);
            let min = a.min(b);
            max + (1.0 + 10.0_f64.powf(min - max)).log10()
        };

        let n = pool_size as f64;
        let mut level_log = 0.0; // log10(P(n, 0)) = 0
        let mut total_log: Option<f64> = None;

        for j in 0..=last.min(pool_size) {
            if j > 0 {
                // P(n, j) = P(n, j - 1) * (n - j + 1)
                level_log += (n - j as f64 + 1.0).log10();
            }
            if j >= first {
                total_log = Some(match total_log {
                    Some(t) => log10_add(t, level_log),
                    None => level_log,
                });
            }
        }

        Complexity {
            log_val: total_log.unwrap_or(f64::NEG_INFINITY),
        }
    }

    /// Returns the percentage of the branching tree covered by `evaluations`.
    /// Returns `None` if the tree is empty.
    pub fn coverage(&self, evaluations: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((evaluations as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.max(0.0).floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw Log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// The candidate-free summary of a problem.
///
/// Monitors and statistics only need the dimensions of a run, so they receive
/// a `ProblemShape` instead of being generic over the candidate type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProblemShape {
    pub pool_size: usize,
    pub selection_size: usize,
    pub mode: SearchMode,
    pub sense: ObjectiveSense,
    pub duplicate_handling: DuplicateHandling,
}

impl ProblemShape {
    /// Returns the complexity of the branching tree of this shape.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.mode, self.pool_size, self.selection_size)
    }
}

impl std::fmt::Display for ProblemShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProblemShape(pool_size: {}, selection_size: {}, mode: {}, sense: {})",
            self.pool_size, self.selection_size, self.mode, self.sense
        )
    }
}

/// An immutable, validated search problem.
///
/// Construction goes through `ProblemBuilder`; every `Problem` in existence
/// satisfies `1 <= selection_size <= pool_size`.
#[derive(Clone)]
pub struct Problem<C> {
    candidates: Vec<C>,
    /// `value_classes[i]` is the smallest index `j` with `candidates[j] == candidates[i]`.
    value_classes: Vec<usize>,
    selection_size: usize,
    mode: SearchMode,
    sense: ObjectiveSense,
    duplicate_handling: DuplicateHandling,
}

impl<C> Problem<C> {
    /// Returns the candidate pool in input order.
    #[inline]
    pub fn candidates(&self) -> &[C] {
        &self.candidates
    }

    /// Returns the candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn candidate(&self, index: CandidateIndex) -> &C {
        let i = index.get();
        debug_assert!(
            i < self.pool_size(),
            "called `Problem::candidate` with candidate index out of bounds: the len is {} but the index is {}",
            self.pool_size(),
            i
        );

        &self.candidates[i]
    }

    /// Returns the number of occurrences in the pool.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.candidates.len()
    }

    /// Returns the length of a complete position.
    #[inline]
    pub fn selection_size(&self) -> usize {
        self.selection_size
    }

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[inline]
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    #[inline]
    pub fn duplicate_handling(&self) -> DuplicateHandling {
        self.duplicate_handling
    }

    /// Returns the value class of an occurrence: the first index in the pool
    /// holding an equal candidate. Two occurrences are interchangeable iff
    /// their classes are equal.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value_class(&self, index: CandidateIndex) -> usize {
        self.value_classes[index.get()]
    }

    /// Returns `true` if at least two occurrences hold equal candidates.
    #[inline]
    pub fn has_duplicates(&self) -> bool {
        self.value_classes
            .iter()
            .enumerate()
            .any(|(i, &class)| class != i)
    }

    /// Returns the candidate-free summary of this problem.
    #[inline]
    pub fn shape(&self) -> ProblemShape {
        ProblemShape {
            pool_size: self.pool_size(),
            selection_size: self.selection_size,
            mode: self.mode,
            sense: self.sense,
            duplicate_handling: self.duplicate_handling,
        }
    }

    /// Returns the complexity of the branching tree.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        self.shape().complexity()
    }
}

impl<C> Problem<C>
where
    C: Clone,
{
    /// Writes the candidates addressed by `position` into `out`, replacing
    /// its previous contents. Solvers reuse `out` across evaluations.
    #[inline]
    pub fn materialize_into(&self, position: &[CandidateIndex], out: &mut Vec<C>) {
        out.clear();
        out.extend(position.iter().map(|&i| self.candidate(i).clone()));
    }

    /// Returns the candidates addressed by `position`.
    #[inline]
    pub fn materialize(&self, position: &[CandidateIndex]) -> Vec<C> {
        let mut out = Vec::with_capacity(position.len());
        self.materialize_into(position, &mut out);
        out
    }
}

impl<C> std::fmt::Debug for Problem<C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("candidates", &self.candidates)
            .field("selection_size", &self.selection_size)
            .field("mode", &self.mode)
            .field("sense", &self.sense)
            .field("duplicate_handling", &self.duplicate_handling)
            .finish()
    }
}

impl<C> std::fmt::Display for Problem<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem(pool_size: {}, selection_size: {}, mode: {}, sense: {})",
            self.pool_size(),
            self.selection_size,
            self.mode,
            self.sense
        )
    }
}

/// Builder for `Problem`.
///
/// # Defaults
///
/// | Field | Default | Semantics |
/// | :--- | :--- | :--- |
/// | `mode` | `Combination` | order of selected candidates is irrelevant |
/// | `sense` | `Minimize` | smaller objective values are better |
/// | `selection_size` | pool size | complete positions use every occurrence |
/// | `duplicate_handling` | `Preserve` | value-identical siblings are all scored |
///
/// # Examples
///
/// ```rust
/// # use enusearch_model::problem::{ProblemBuilder, SearchMode, ObjectiveSense};
/// let problem = ProblemBuilder::new(vec![2, 4, 5, 6, 3, 1, 7])
///     .order(false)
///     .minimize(false)
///     .selection_size(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.pool_size(), 7);
/// assert_eq!(problem.selection_size(), 5);
/// assert_eq!(problem.mode(), SearchMode::Combination);
/// assert_eq!(problem.sense(), ObjectiveSense::Maximize);
/// ```
#[derive(Clone, Debug)]
pub struct ProblemBuilder<C> {
    candidates: Vec<C>,
    selection_size: Option<usize>,
    mode: SearchMode,
    sense: ObjectiveSense,
    duplicate_handling: DuplicateHandling,
}

impl<C> ProblemBuilder<C> {
    /// Creates a new builder over the given candidate pool.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
            selection_size: None,
            mode: SearchMode::default(),
            sense: ObjectiveSense::default(),
            duplicate_handling: DuplicateHandling::default(),
        }
    }

    /// Sets the search mode.
    #[inline]
    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the search mode from an `order` flag; `true` searches permutations.
    #[inline]
    pub fn order(self, order: bool) -> Self {
        self.mode(SearchMode::from_order(order))
    }

    /// Sets the objective sense.
    #[inline]
    pub fn sense(mut self, sense: ObjectiveSense) -> Self {
        self.sense = sense;
        self
    }

    /// Sets the objective sense from a `minimize` flag.
    #[inline]
    pub fn minimize(self, minimize: bool) -> Self {
        self.sense(ObjectiveSense::from_minimize(minimize))
    }

    /// Sets the length of a complete position.
    #[inline]
    pub fn selection_size(mut self, selection_size: usize) -> Self {
        self.selection_size = Some(selection_size);
        self
    }

    /// Sets the length of a complete position, or resets it to the pool size.
    #[inline]
    pub fn maybe_selection_size(mut self, selection_size: Option<usize>) -> Self {
        self.selection_size = selection_size;
        self
    }

    /// Sets how value-identical sibling positions are treated.
    #[inline]
    pub fn duplicate_handling(mut self, duplicate_handling: DuplicateHandling) -> Self {
        self.duplicate_handling = duplicate_handling;
        self
    }

    /// Returns the number of candidates collected so far.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.candidates.len()
    }
}

impl<C> ProblemBuilder<C>
where
    C: PartialEq,
{
    /// Validates the configuration and builds the `Problem`.
    ///
    /// # Errors
    ///
    /// - `ProblemError::EmptyPool` if there are no candidates.
    /// - `ProblemError::ZeroSelectionSize` if a selection size of zero was requested.
    /// - `ProblemError::SelectionSizeExceedsPool` if the selection size is larger
    ///   than the number of occurrences in the pool.
    pub fn build(self) -> Result<Problem<C>, ProblemError> {
        let pool_size = self.candidates.len();
        if pool_size == 0 {
            return Err(ProblemError::EmptyPool);
        }

        let selection_size = self.selection_size.unwrap_or(pool_size);
        if selection_size == 0 {
            return Err(ProblemError::ZeroSelectionSize);
        }
        if selection_size > pool_size {
            return Err(ProblemError::SelectionSizeExceedsPool {
                selection_size,
                pool_size,
            });
        }

        let value_classes = value_classes(&self.candidates);

        Ok(Problem {
            candidates: self.candidates,
            value_classes,
            selection_size,
            mode: self.mode,
            sense: self.sense,
            duplicate_handling: self.duplicate_handling,
        })
    }
}

/// Assigns each occurrence the index of the first equal candidate.
/// Quadratic in the pool size.
fn value_classes<C>(candidates: &[C]) -> Vec<usize>
where
    C: PartialEq,
{
    let mut classes: Vec<usize> = Vec::with_capacity(candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        let class = (0..i)
            .find(|&j| classes[j] == j && candidates[j] == *candidate)
            .unwrap_or(i);
        classes.push(class);
    }
    classes
}
