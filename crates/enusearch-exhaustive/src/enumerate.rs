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

//! Lexicographic enumeration of selections
//!
//! Selections are enumerated as occurrence indices, depth-first with the
//! smallest free index tried first. For combinations the indices of a
//! selection are strictly increasing; for permutations every unused index is
//! tried at every slot. Both orders match the lexicographic order of index
//! tuples.
//!
//! Enumeration is split by the first element of a selection. Visiting every
//! admissible first element in ascending order reproduces the complete
//! lexicographic order, which lets workers own disjoint groups of first
//! elements.

use enusearch_model::{index::CandidateIndex, problem::SearchMode};
use fixedbitset::FixedBitSet;
use std::ops::Range;

/// Returns the first elements that start at least one selection.
///
/// Every occurrence can open a permutation. A combination starting at `i`
/// needs `selection_size - 1` larger indices after it.
#[inline]
pub fn first_elements(mode: SearchMode, pool_size: usize, selection_size: usize) -> Range<usize> {
    match mode {
        SearchMode::Permutation => 0..pool_size,
        SearchMode::Combination => 0..(pool_size + 1).saturating_sub(selection_size),
    }
}

/// Visits every combination of `selection_size` occurrences out of
/// `pool_size` that starts with `first`, in lexicographic order.
///
/// # Errors
///
/// Stops at the first error returned by `visit` and returns it.
pub fn for_each_combination_from<E, F>(
    pool_size: usize,
    selection_size: usize,
    first: CandidateIndex,
    mut visit: F,
) -> Result<(), E>
where
    F: FnMut(&[CandidateIndex]) -> Result<(), E>,
{
    debug_assert!(
        first.get() < pool_size,
        "called `for_each_combination_from` with first element out of bounds: the len is {} but the index is {}",
        pool_size,
        first.get()
    );

    let mut current = Vec::with_capacity(selection_size);
    current.push(first);
    extend_combinations(pool_size, selection_size, &mut current, &mut visit)
}

fn extend_combinations<E, F>(
    pool_size: usize,
    selection_size: usize,
    current: &mut Vec<CandidateIndex>,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[CandidateIndex]) -> Result<(), E>,
{
    if current.len() >= selection_size {
        return visit(current);
    }

    let remaining = selection_size - current.len();
    if remaining > pool_size {
        return Ok(());
    }

    let next = current.last().map_or(0, |index| index.get() + 1);
    // Leave room for the slots after this one.
    for index in next..=(pool_size - remaining) {
        current.push(CandidateIndex::new(index));
        extend_combinations(pool_size, selection_size, current, visit)?;
        current.pop();
    }
    Ok(())
}

/// Visits every ordered selection of `selection_size` distinct occurrences
/// out of `pool_size` that starts with `first`, in lexicographic order.
///
/// # Errors
///
/// Stops at the first error returned by `visit` and returns it.
pub fn for_each_permutation_from<E, F>(
    pool_size: usize,
    selection_size: usize,
    first: CandidateIndex,
    mut visit: F,
) -> Result<(), E>
where
    F: FnMut(&[CandidateIndex]) -> Result<(), E>,
{
    debug_assert!(
        first.get() < pool_size,
        "called `for_each_permutation_from` with first element out of bounds: the len is {} but the index is {}",
        pool_size,
        first.get()
    );

    let mut used = FixedBitSet::with_capacity(pool_size);
    used.insert(first.get());

    let mut current = Vec::with_capacity(selection_size);
    current.push(first);
    extend_permutations(pool_size, selection_size, &mut current, &mut used, &mut visit)
}

fn extend_permutations<E, F>(
    pool_size: usize,
    selection_size: usize,
    current: &mut Vec<CandidateIndex>,
    used: &mut FixedBitSet,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[CandidateIndex]) -> Result<(), E>,
{
    if current.len() >= selection_size {
        return visit(current);
    }

    for index in 0..pool_size {
        if used.contains(index) {
            continue;
        }
        used.insert(index);
        current.push(CandidateIndex::new(index));
        extend_permutations(pool_size, selection_size, current, used, visit)?;
        current.pop();
        used.set(index, false);
    }
    Ok(())
}

/// Visits every selection of `selection_size` occurrences out of `pool_size`
/// that starts with `first`, in lexicographic order.
///
/// # Errors
///
/// Stops at the first error returned by `visit` and returns it.
#[inline]
pub fn for_each_selection_from<E, F>(
    mode: SearchMode,
    pool_size: usize,
    selection_size: usize,
    first: CandidateIndex,
    visit: F,
) -> Result<(), E>
where
    F: FnMut(&[CandidateIndex]) -> Result<(), E>,
{
    match mode {
        SearchMode::Combination => {
            for_each_combination_from(pool_size, selection_size, first, visit)
        }
        SearchMode::Permutation => {
            for_each_permutation_from(pool_size, selection_size, first, visit)
        }
    }
}
