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

//! # Objective Value Trait
//!
//! Unified numeric bounds for objective scores. Solvers normalize every run
//! to minimization by multiplying a score with the sign of the objective
//! sense, so the scalar must be negatable: `ObjectiveValue` collects
//! `num_traits::Signed` together with the comparison, formatting and thread
//! bounds the solvers need into a single alias.
//!
//! ## Highlights
//!
//! - Satisfied by `i8`..`i128`, `isize`, `f32` and `f64`.
//! - Unsigned types are rejected at compile time; a maximization over them
//!   could not be expressed as a minimization of the negated score.
//! - `compare_values` gives the solvers a total order even for floats: values
//!   that are not comparable to themselves (NaN) sort after everything else.
//!
//! Note: negating `MIN` of a signed integer overflows. Objectives that return
//! the extreme minimum of their type cannot be maximized.

use num_traits::Signed;
use std::cmp::Ordering;

/// A trait alias for scalar types an objective function may return.
pub trait ObjectiveValue:
    Signed + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> ObjectiveValue for T where
    T: Signed + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

/// Returns `true` if `value` is not comparable to itself (i.e. NaN).
#[inline(always)]
pub fn is_incomparable<T>(value: T) -> bool
where
    T: ObjectiveValue,
{
    value.partial_cmp(&value).is_none()
}

/// Returns `true` if `value` is positive infinity.
///
/// Integers have no infinity. Only an infinite float minus itself is NaN,
/// which separates `+inf` from the largest finite value.
#[inline(always)]
pub fn is_positive_infinite<T>(value: T) -> bool
where
    T: ObjectiveValue,
{
    value > T::zero() && is_incomparable(value - value)
}

/// Compares two objective values with a total order.
///
/// Comparable values use their natural order. Incomparable values are
/// greater than every comparable value and equal to each other, so a
/// NaN score is always the least promising node in an ascending order.
///
/// # Examples
///
/// ```rust
/// # use enusearch_core::num::compare_values;
/// # use std::cmp::Ordering;
/// assert_eq!(compare_values(1.0, 2.0), Ordering::Less);
/// assert_eq!(compare_values(f64::NAN, 2.0), Ordering::Greater);
/// assert_eq!(compare_values(f64::NAN, f64::NAN), Ordering::Equal);
/// ```
#[inline]
pub fn compare_values<T>(a: T, b: T) -> Ordering
where
    T: ObjectiveValue,
{
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (is_incomparable(a), is_incomparable(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Values that are each self-comparable but not mutually
            // comparable do not exist for the primitive types.
            (false, false) => Ordering::Equal,
        },
    }
}
