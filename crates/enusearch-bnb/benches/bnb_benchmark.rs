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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use enusearch_bnb::bnb::BnbSolver;
use enusearch_bnb::monitor::no_op::NoOperationMonitor;
use enusearch_bnb::seeding::GreedyDive;
use enusearch_model::problem::{Problem, ProblemBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SEED: u64 = 0x5EED_CAFE;

fn random_pool(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

/// Weighted by slot, so the order of a permutation matters.
fn weighted_sum(selection: &[i64]) -> i64 {
    selection
        .iter()
        .enumerate()
        .map(|(i, v)| (i as i64 + 1) * v)
        .sum()
}

fn sum(selection: &[i64]) -> i64 {
    selection.iter().sum()
}

fn build(pool: &[i64], order: bool, minimize: bool, selection_size: usize) -> Problem<i64> {
    ProblemBuilder::new(pool.iter().copied())
        .order(order)
        .minimize(minimize)
        .selection_size(selection_size)
        .build()
        .unwrap_or_else(|e| panic!("Benchmark configuration error: {}", e))
}

fn bench_combinations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("bnb_combination_maximize");

    for &pool_size in &[10usize, 12, 14] {
        let pool = random_pool(&mut rng, pool_size);
        let problem = build(&pool, false, false, pool_size / 2);
        let mut solver = BnbSolver::preallocated(pool_size, pool_size / 2);

        group.throughput(Throughput::Elements(pool_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pool_size),
            &problem,
            |b, problem| {
                b.iter(|| {
                    let outcome = solver
                        .solve(black_box(problem), &mut sum, NoOperationMonitor::new())
                        .unwrap_or_else(|e| match e {});
                    black_box(outcome.is_optimal())
                })
            },
        );
    }
    group.finish();
}

fn bench_permutations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("bnb_permutation_minimize");

    for &pool_size in &[6usize, 7, 8] {
        let pool = random_pool(&mut rng, pool_size);
        let problem = build(&pool, true, true, pool_size);
        let mut solver = BnbSolver::preallocated(pool_size, pool_size);

        group.throughput(Throughput::Elements(pool_size as u64));
        group.bench_with_input(
            BenchmarkId::new("unseeded", pool_size),
            &problem,
            |b, problem| {
                b.iter(|| {
                    let outcome = solver
                        .solve(
                            black_box(problem),
                            &mut weighted_sum,
                            NoOperationMonitor::new(),
                        )
                        .unwrap_or_else(|e| match e {});
                    black_box(outcome.is_optimal())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("greedy_dive", pool_size),
            &problem,
            |b, problem| {
                b.iter(|| {
                    let outcome = solver
                        .solve_with_seeder(
                            black_box(problem),
                            &mut weighted_sum,
                            NoOperationMonitor::new(),
                            GreedyDive::new(),
                        )
                        .unwrap_or_else(|e| match e {});
                    black_box(outcome.is_optimal())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_combinations, bench_permutations);
criterion_main!(benches);
