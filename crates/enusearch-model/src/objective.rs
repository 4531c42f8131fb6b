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

//! The scoring seam between the caller and the solvers.
//!
//! Solvers never call a closure directly. They go through `Objective`, which
//! gives every scoring function a name for logs and a uniform fallible
//! signature: an objective that cannot fail uses `Infallible` as its error,
//! so the `?` in the solver loop compiles away.
//!
//! Two adapters cover the common cases:
//!
//! * any `FnMut(&[C]) -> T` is an `Objective<C, T>` with `Error = Infallible`;
//! * `Fallible(f)` wraps an `FnMut(&[C]) -> Result<T, E>` and surfaces `E`.
//!
//! A failing evaluation aborts the search and is handed back to the caller
//! unchanged; solvers do not swallow or retry objective errors.

use std::convert::Infallible;

/// A scoring function over an ordered selection of candidates.
///
/// The slice passed to `evaluate` is in position order. In combination mode
/// the order follows the candidate pool; in permutation mode it is the
/// arrangement being scored.
pub trait Objective<C, T> {
    /// The error returned by a failed evaluation.
    type Error;

    /// Returns the name of the objective, attached to the solvers' debug events.
    fn name(&self) -> &str {
        "Objective"
    }

    /// Scores a selection.
    fn evaluate(&mut self, selection: &[C]) -> Result<T, Self::Error>;
}

impl<C, T, F> Objective<C, T> for F
where
    F: FnMut(&[C]) -> T,
{
    type Error = Infallible;

    #[inline(always)]
    fn evaluate(&mut self, selection: &[C]) -> Result<T, Self::Error> {
        Ok(self(selection))
    }
}

/// Adapter turning a closure returning `Result` into an `Objective`.
///
/// # Examples
///
/// ```rust
/// # use enusearch_model::objective::{Fallible, Objective};
/// let mut checked = Fallible(|s: &[i32]| {
///     s.iter()
///         .try_fold(0i32, |acc, &x| acc.checked_add(x))
///         .ok_or("overflow")
/// });
/// assert_eq!(checked.evaluate(&[1, 2, 3][..]), Ok(6));
/// assert_eq!(checked.evaluate(&[i32::MAX, 1][..]), Err("overflow"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

impl<C, T, E, F> Objective<C, T> for Fallible<F>
where
    F: FnMut(&[C]) -> Result<T, E>,
{
    type Error = E;

    #[inline(always)]
    fn evaluate(&mut self, selection: &[C]) -> Result<T, Self::Error> {
        (self.0)(selection)
    }
}

/// Adapter attaching a name to an objective for debug events.
#[derive(Clone, Debug)]
pub struct Named<O> {
    name: String,
    inner: O,
}

impl<O> Named<O> {
    /// Wraps `inner` under the given name.
    pub fn new(name: impl Into<String>, inner: O) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Returns the wrapped objective.
    #[inline]
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<C, T, O> Objective<C, T> for Named<O>
where
    O: Objective<C, T>,
{
    type Error = O::Error;

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    fn evaluate(&mut self, selection: &[C]) -> Result<T, Self::Error> {
        self.inner.evaluate(selection)
    }
}
