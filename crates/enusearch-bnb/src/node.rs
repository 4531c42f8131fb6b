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

use enusearch_model::index::CandidateIndex;
use smallvec::SmallVec;

/// A partial or complete arrangement of pool occurrences.
///
/// Inline storage covers the common case of small selections without a heap
/// allocation per node.
pub type Position = SmallVec<[CandidateIndex; 8]>;

/// A scored position.
///
/// `value` is the internal value, `sign * objective(position)`, so a smaller
/// value is always better regardless of the objective sense.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    position: Position,
    value: T,
}

impl<T> Node<T>
where
    T: Copy,
{
    /// Creates a new node.
    #[inline]
    pub fn new(position: Position, value: T) -> Self {
        Self { position, value }
    }

    /// Returns the position of this node.
    #[inline]
    pub fn position(&self) -> &[CandidateIndex] {
        &self.position
    }

    /// Returns the internal (sign-adjusted) value of this node.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the number of occurrences in the position.
    #[inline]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Returns `true` if the position is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Consumes the node and returns its position.
    #[inline]
    pub fn into_position(self) -> Position {
        self.position
    }
}

impl<T> std::fmt::Display for Node<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node(value: {}, position: [", self.value)?;
        for (i, index) in self.position.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index.get())?;
        }
        write!(f, "])")
    }
}
