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

//! Branch-and-bound against exhaustive search on small random pools.
//!
//! Objectives are chosen per mode and sense so that the sign-adjusted value
//! never improves along a branch:
//! - combinations score the plain sum, permutations a slot-weighted sum;
//! - the pool is non-negative exactly when `order == minimize`, so appending
//!   (permutations) or dropping (combinations) a candidate never helps.

use enusearch::options::SolveOptions;
use enusearch::{branch_and_bound, exhaustive};
use enusearch_bnb::eval::validation::is_monotone_exhaustive;
use enusearch_model::problem::DuplicateHandling;
use proptest::prelude::*;

fn sum(x: &[i64]) -> i64 {
    x.iter().sum()
}

fn weighted(x: &[i64]) -> i64 {
    x.iter()
        .enumerate()
        .map(|(i, v)| (i as i64 + 1) * v)
        .sum()
}

#[derive(Debug, Clone)]
struct Case {
    pool: Vec<i64>,
    order: bool,
    minimize: bool,
    selection_size: usize,
}

impl Case {
    fn options(&self) -> SolveOptions {
        SolveOptions::new()
            .order(self.order)
            .minimize(self.minimize)
            .selection_size(self.selection_size)
    }

    fn objective(&self) -> fn(&[i64]) -> i64 {
        if self.order { weighted } else { sum }
    }
}

fn case() -> impl Strategy<Value = Case> {
    (
        proptest::collection::vec(0i64..20, 1..=6),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_flat_map(|(magnitudes, order, minimize)| {
            let len = magnitudes.len();
            let pool: Vec<i64> = if order == minimize {
                magnitudes
            } else {
                magnitudes.into_iter().map(|m| -m).collect()
            };
            (1..=len).prop_map(move |selection_size| Case {
                pool: pool.clone(),
                order,
                minimize,
                selection_size,
            })
        })
}

/// `selection` uses no candidate more often than `pool` holds it.
fn is_sub_multiset(selection: &[i64], pool: &[i64]) -> bool {
    let mut remaining = pool.to_vec();
    selection.iter().all(|value| {
        match remaining.iter().position(|candidate| candidate == value) {
            Some(at) => {
                remaining.swap_remove(at);
                true
            }
            None => false,
        }
    })
}

proptest! {
    #[test]
    fn objectives_under_test_are_monotone(case in case()) {
        let problem = case.options().build_problem(case.pool.clone()).unwrap();
        let mut objective = case.objective();
        prop_assert!(is_monotone_exhaustive(&problem, &mut objective, 10_000).unwrap());
    }

    #[test]
    fn branch_and_bound_matches_exhaustive(case in case()) {
        let options = case.options();
        let bnb = branch_and_bound::solve(case.objective(), case.pool.clone(), &options).unwrap();
        let ex = exhaustive::solve(case.objective(), case.pool.clone(), &options).unwrap();

        prop_assert_eq!(bnb.objective_value(), ex.objective_value());
        prop_assert_eq!(bnb.len(), case.selection_size);
        prop_assert!(is_sub_multiset(bnb.selection(), &case.pool));
        prop_assert_eq!((case.objective())(bnb.selection()), bnb.objective_value());
    }

    #[test]
    fn variants_keep_the_optimum(case in case()) {
        let options = case.options();
        let expected = exhaustive::solve(case.objective(), case.pool.clone(), &options)
            .unwrap()
            .objective_value();

        for variant in [
            options.warm_start(true),
            options.duplicate_handling(DuplicateHandling::Collapse),
            options
                .warm_start(true)
                .duplicate_handling(DuplicateHandling::Collapse),
        ] {
            let bnb = branch_and_bound::solve(case.objective(), case.pool.clone(), &variant)
                .unwrap();
            prop_assert_eq!(bnb.objective_value(), expected);
        }
    }

    #[test]
    fn parallel_exhaustive_matches_sequential(case in case()) {
        let options = case.options();
        let sequential = exhaustive::solve(case.objective(), case.pool.clone(), &options).unwrap();
        let parallel = exhaustive::solve(case.objective(), case.pool.clone(), &options.n_jobs(3))
            .unwrap();

        prop_assert_eq!(sequential.indices(), parallel.indices());
    }
}
