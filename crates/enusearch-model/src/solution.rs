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

use crate::index::CandidateIndex;
use enusearch_core::num::ObjectiveValue;

/// The best complete position found by a solver.
///
/// `selection` holds the candidates in position order, `indices` the
/// occurrences they were taken from. Both have the selection size of the
/// problem that produced them. The objective value is reported in the
/// caller's terms, not in the internal minimization terms.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<C, T> {
    objective_value: T,
    selection: Vec<C>,
    indices: Vec<CandidateIndex>,
}

impl<C, T> Solution<C, T>
where
    T: ObjectiveValue,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if `selection` and `indices` have different lengths.
    pub fn new(objective_value: T, selection: Vec<C>, indices: Vec<CandidateIndex>) -> Self {
        assert_eq!(
            selection.len(),
            indices.len(),
            "called `Solution::new` with inconsistent vector lengths: selection.len() = {}, indices.len() = {}",
            selection.len(),
            indices.len()
        );

        Self {
            objective_value,
            selection,
            indices,
        }
    }

    /// Returns the objective value of the selection.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    /// Returns the selected candidates in position order.
    #[inline]
    pub fn selection(&self) -> &[C] {
        &self.selection
    }

    /// Returns the pool occurrences the selection was taken from.
    #[inline]
    pub fn indices(&self) -> &[CandidateIndex] {
        &self.indices
    }

    /// Returns the number of selected candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if nothing was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Consumes the solution and returns the objective value and selection.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<C>) {
        (self.objective_value, self.selection)
    }
}

impl<C, T> std::fmt::Display for Solution<C, T>
where
    C: std::fmt::Debug,
    T: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No candidates selected)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10} | {:<12}", "Position", "Index", "Candidate")?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<12}", "", "", "")?;
        for (slot, (candidate, index)) in self.selection.iter().zip(&self.indices).enumerate() {
            writeln!(
                f,
                "   {:<10} | {:<10} | {:<12}",
                slot,
                index.get(),
                format!("{:?}", candidate)
            )?;
        }

        Ok(())
    }
}
