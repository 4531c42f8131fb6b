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

use crate::stats::BnbSolverStatistics;
use enusearch_core::num::ObjectiveValue;
use enusearch_model::solution::Solution;

/// What a finished search produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<C, T> {
    /// The search ran to completion; the solution is optimal under the
    /// monotonicity precondition.
    Optimal(Solution<C, T>),
    /// The search was aborted after a complete position had been found.
    Feasible(Solution<C, T>),
    /// No complete position was found.
    NoSolution,
}

impl<C, T> std::fmt::Display for SolverResult<C, T>
where
    T: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(objective={})", solution.objective_value())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(objective={})", solution.objective_value())
            }
            SolverResult::NoSolution => write!(f, "NoSolution"),
        }
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BnbTerminationReason {
    /// Every pending node was expanded.
    FrontierExhausted,
    /// The most promising pending node could not beat the bound, so no
    /// pending node could.
    BoundDominated,
    /// A monitor requested termination. The string carries its reason.
    Aborted(String),
}

impl BnbTerminationReason {
    /// Returns `true` if the search ran to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !matches!(self, BnbTerminationReason::Aborted(_))
    }
}

impl std::fmt::Display for BnbTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BnbTerminationReason::FrontierExhausted => write!(f, "Frontier Exhausted"),
            BnbTerminationReason::BoundDominated => write!(f, "Bound Dominated"),
            BnbTerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The error returned by `BnbSolverOutcome::into_solution` when the search
/// did not produce a complete position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolutionError {
    termination_reason: BnbTerminationReason,
}

impl NoSolutionError {
    /// Returns why the search stopped.
    #[inline]
    pub fn termination_reason(&self) -> &BnbTerminationReason {
        &self.termination_reason
    }
}

impl std::fmt::Display for NoSolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No solution found ({})",
            self.termination_reason
        )
    }
}

impl std::error::Error for NoSolutionError {}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<C, T> {
    result: SolverResult<C, T>,
    termination_reason: BnbTerminationReason,
    statistics: BnbSolverStatistics,
}

impl<C, T> BnbSolverOutcome<C, T> {
    /// An outcome for a search that ran to completion with an incumbent.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `reason` is `Aborted`.
    #[inline]
    pub fn optimal(
        solution: Solution<C, T>,
        reason: BnbTerminationReason,
        statistics: BnbSolverStatistics,
    ) -> Self {
        debug_assert!(
            reason.is_complete(),
            "called `BnbSolverOutcome::optimal` with an aborted termination reason: {}",
            reason
        );

        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: reason,
            statistics,
        }
    }

    /// An outcome for a search that ran to completion without an incumbent.
    #[inline]
    pub fn no_solution(reason: BnbTerminationReason, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::NoSolution,
            termination_reason: reason,
            statistics,
        }
    }

    /// An outcome for a search a monitor stopped early.
    #[inline]
    pub fn aborted<R>(
        solution: Option<Solution<C, T>>,
        reason: R,
        statistics: BnbSolverStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match solution {
            Some(solution) => SolverResult::Feasible(solution),
            None => SolverResult::NoSolution,
        };

        Self {
            result,
            termination_reason: BnbTerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<C, T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &BnbTerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns the solution, if any, regardless of whether it is proven optimal.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<C, T>> {
        match &self.result {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            SolverResult::NoSolution => None,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.solution().is_some()
    }

    /// Converts the outcome into its solution.
    ///
    /// # Errors
    ///
    /// Returns `NoSolutionError` if no complete position was found.
    pub fn into_solution(self) -> Result<Solution<C, T>, NoSolutionError> {
        match self.result {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Ok(solution),
            SolverResult::NoSolution => Err(NoSolutionError {
                termination_reason: self.termination_reason,
            }),
        }
    }
}

impl<C, T> std::fmt::Display for BnbSolverOutcome<C, T>
where
    T: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbSolverOutcome(result: {}, termination: {})",
            self.result, self.termination_reason
        )
    }
}
