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

//! Bound and incumbent bookkeeping for branch-and-bound
//!
//! `Bound` is the internal value of the best complete position found so far,
//! or `Unbounded` (positive infinity) before the first one. It only ever
//! tightens. `Incumbent` pairs the bound with the position achieving it.
//!
//! Notes
//! - `Bound::admits(v)` is the strict comparison `v < bound`. A node whose
//!   value equals the bound can never improve the incumbent.
//! - Incomparable values (NaN) are never admitted, not even by `Unbounded`.
//! - `Unbounded` stands for `+inf`, so an infinite value is not admitted
//!   either.

use crate::node::{Node, Position};
use enusearch_core::num::{ObjectiveValue, is_incomparable, is_positive_infinite};
use enusearch_model::index::CandidateIndex;

/// The running bound of a search, in internal (always minimized) terms.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Bound<T> {
    /// No complete position has been found yet.
    #[default]
    Unbounded,
    /// The internal value of the incumbent.
    Finite(T),
}

impl<T> Bound<T>
where
    T: ObjectiveValue,
{
    /// Returns `true` if a node with internal value `value` can still beat
    /// this bound.
    #[inline(always)]
    pub fn admits(&self, value: T) -> bool {
        match *self {
            Bound::Unbounded => !is_incomparable(value) && !is_positive_infinite(value),
            Bound::Finite(bound) => value < bound,
        }
    }

    /// Returns the finite bound, if any.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match *self {
            Bound::Unbounded => None,
            Bound::Finite(bound) => Some(bound),
        }
    }

    /// Returns `true` if a complete position has been found.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Bound::Finite(_))
    }
}

impl<T> std::fmt::Display for Bound<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "Inf"),
            Bound::Finite(bound) => write!(f, "{}", bound),
        }
    }
}

/// The best complete position found so far, together with its bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Incumbent<T> {
    bound: Bound<T>,
    position: Option<Position>,
}

impl<T> Default for Incumbent<T>
where
    T: ObjectiveValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: ObjectiveValue,
{
    /// Creates an empty incumbent with an unbounded bound.
    #[inline]
    pub fn new() -> Self {
        Self {
            bound: Bound::Unbounded,
            position: None,
        }
    }

    /// Returns the current bound.
    #[inline]
    pub fn bound(&self) -> Bound<T> {
        self.bound
    }

    /// Returns the position achieving the bound, if any.
    #[inline]
    pub fn position(&self) -> Option<&[CandidateIndex]> {
        self.position.as_deref()
    }

    /// Returns `true` if a complete position has been installed.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.position.is_some()
    }

    /// Installs `node` if its value is strictly better than the bound.
    /// Returns `true` if the incumbent changed.
    #[inline]
    pub fn try_install(&mut self, node: &Node<T>) -> bool {
        if !self.bound.admits(node.value()) {
            return false;
        }

        self.bound = Bound::Finite(node.value());
        self.position = Some(node.position().iter().copied().collect());
        true
    }

    /// Consumes the incumbent and returns its value and position, if any.
    #[inline]
    pub fn into_parts(self) -> Option<(T, Position)> {
        match (self.bound, self.position) {
            (Bound::Finite(value), Some(position)) => Some((value, position)),
            _ => None,
        }
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(
                f,
                "Incumbent(bound: {}, len: {})",
                self.bound,
                position.len()
            ),
            None => write!(f, "Incumbent(bound: {})", self.bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn node(value: i64) -> Node<i64> {
        Node::new(smallvec![CandidateIndex::new(0), CandidateIndex::new(1)], value)
    }

    #[test]
    fn test_unbounded_admits_everything_below_infinity() {
        let b: Bound<f64> = Bound::Unbounded;
        assert!(b.admits(f64::MAX));
        assert!(b.admits(f64::NEG_INFINITY));
        assert!(!b.admits(f64::INFINITY));
        assert!(!b.admits(f64::NAN));
        assert!(Bound::<i64>::Unbounded.admits(i64::MAX));
        assert_eq!(b.value(), None);
        assert_eq!(format!("{}", b), "Inf");
    }

    #[test]
    fn test_finite_bound_is_strict() {
        let b = Bound::Finite(10i32);
        assert!(b.admits(9));
        assert!(!b.admits(10));
        assert!(!b.admits(11));
        assert_eq!(b.value(), Some(10));
    }

    #[test]
    fn test_try_install_only_accepts_strict_improvements() {
        let mut inc = Incumbent::new();
        assert!(!inc.is_some());
        assert_eq!(format!("{}", inc), "Incumbent(bound: Inf)");

        assert!(inc.try_install(&node(5)));
        assert_eq!(inc.bound(), Bound::Finite(5));
        assert!(!inc.try_install(&node(5)));
        assert!(!inc.try_install(&node(6)));
        assert!(inc.try_install(&node(-2)));
        assert_eq!(inc.bound(), Bound::Finite(-2));
        assert_eq!(inc.position().unwrap().len(), 2);
        assert_eq!(format!("{}", inc), "Incumbent(bound: -2, len: 2)");

        let (value, position) = inc.into_parts().unwrap();
        assert_eq!(value, -2);
        assert_eq!(position.len(), 2);
    }

    #[test]
    fn test_try_install_rejects_infinite_value() {
        let mut inc = Incumbent::new();
        let infinite = Node::new(smallvec![CandidateIndex::new(0)], f64::INFINITY);
        assert!(!inc.try_install(&infinite));
        assert!(!inc.is_some());
        assert_eq!(inc.bound(), Bound::Unbounded);
    }

    #[test]
    fn test_empty_incumbent_has_no_parts() {
        let inc: Incumbent<i64> = Incumbent::default();
        assert!(inc.into_parts().is_none());
    }
}
