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

use enusearch_model::problem::ProblemError;

/// Errors returned by the solve entry points.
///
/// `E` is the error type of the objective; it is `Infallible` for plain
/// closures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError<E> {
    /// The candidate pool and selection size do not describe a search.
    Config(ProblemError),
    /// The job count is neither positive, zero, `-1` nor `-2`.
    InvalidJobs(isize),
    /// The objective failed; the search was aborted.
    Objective(E),
    /// The search ended without a scorable selection, for example because
    /// every objective value was NaN.
    NoSolution,
}

impl<E> std::fmt::Display for SolveError<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {}", e),
            Self::InvalidJobs(n) => write!(
                f,
                "Invalid job count {}: expected a non-negative number, -1 or -2",
                n
            ),
            Self::Objective(e) => write!(f, "Objective failed: {}", e),
            Self::NoSolution => write!(f, "No solution found"),
        }
    }
}

impl<E> std::error::Error for SolveError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Objective(e) => Some(e),
            Self::InvalidJobs(_) | Self::NoSolution => None,
        }
    }
}

impl<E> From<ProblemError> for SolveError<E> {
    fn from(e: ProblemError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::error::Error;

    #[test]
    fn test_display() {
        let config: SolveError<Infallible> = ProblemError::ZeroSelectionSize.into();
        assert!(config.to_string().starts_with("Invalid configuration: "));
        assert_eq!(
            SolveError::<Infallible>::InvalidJobs(-3).to_string(),
            "Invalid job count -3: expected a non-negative number, -1 or -2"
        );
        assert_eq!(
            SolveError::Objective("division by zero").to_string(),
            "Objective failed: division by zero"
        );
        assert_eq!(
            SolveError::<Infallible>::NoSolution.to_string(),
            "No solution found"
        );
    }

    #[test]
    fn test_source_points_at_the_cause() {
        let config: SolveError<Infallible> = ProblemError::EmptyPool.into();
        assert!(config.source().is_some());
        assert!(SolveError::<Infallible>::NoSolution.source().is_none());
    }
}
