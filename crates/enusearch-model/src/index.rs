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

use enusearch_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for candidate indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CandidateIndexTag;

impl TypedIndexTag for CandidateIndexTag {
    const NAME: &'static str = "CandidateIndex";
}

/// A typed index addressing one occurrence in the candidate pool.
pub type CandidateIndex = TypedIndex<CandidateIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_index_display() {
        let c = CandidateIndex::new(4);
        assert_eq!(format!("{}", c), "CandidateIndex(4)");
        assert_eq!(c.get(), 4);
    }
}
