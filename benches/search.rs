// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Exact vs heuristic minimum-triangle search.
//!
//! The exhaustive search is cubic in the number of points and the heuristic is
//! quadratic (dominated by building the neighbor rankings), so the gap between
//! the two widens quickly with `n`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mintri::search::NeighborRankings;
use mintri::{
    PointSet, PointSource, SizeMetric, UniformIntegerSource, find_minimum_triangle_exact,
    find_minimum_triangle_heuristic,
};
use std::hint::black_box;

const SEED: u64 = 0xD1EA;

fn points(n: usize) -> PointSet<f64> {
    UniformIntegerSource::seeded(SEED).generate(n)
}

fn benchmark_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_triangle");

    for n in [10usize, 25, 50, 100, 200] {
        let points = points(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("exact", n), &points, |b, points| {
            b.iter(|| find_minimum_triangle_exact(black_box(points), SizeMetric::Perimeter));
        });
        group.bench_with_input(BenchmarkId::new("heuristic", n), &points, |b, points| {
            b.iter(|| find_minimum_triangle_heuristic(black_box(points)));
        });
    }

    group.finish();
}

fn benchmark_rankings(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_rankings");
    for n in [100usize, 500, 1000] {
        let points = points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| NeighborRankings::build(black_box(points)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_searches, benchmark_rankings);
criterion_main!(benches);
