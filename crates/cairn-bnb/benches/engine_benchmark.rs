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

use cairn_bnb::bnb::ExhaustiveCrossingSolver;
use cairn_bnb::monitor::no_op::NoOperationMonitor;
use cairn_ferry::ferry::FerrySolver;
use cairn_model::model::{Bridge, Hiker, Roster};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Builds a roster of `n` hikers with distinct, deterministic speeds.
fn build_roster(n: usize) -> Roster<f64> {
    let mut roster = Roster::new();
    for i in 0..n {
        roster.add(Hiker::new(format!("H{}", i), 7.0 + 6.0 * i as f64));
    }
    roster
}

fn bench_engines(c: &mut Criterion) {
    let bridge = Bridge::new("bench", 100.0);
    let mut group = c.benchmark_group("crossing_engines");

    for n in [4usize, 5, 6] {
        let roster = build_roster(n);

        group.bench_with_input(BenchmarkId::new("ferry", n), &roster, |b, roster| {
            let solver = FerrySolver::new();
            b.iter(|| black_box(solver.solve(black_box(roster), &bridge)));
        });

        group.bench_with_input(BenchmarkId::new("exhaustive", n), &roster, |b, roster| {
            let solver = ExhaustiveCrossingSolver::new();
            b.iter(|| {
                let mut monitor = NoOperationMonitor::new();
                black_box(solver.solve(black_box(roster), &bridge, &mut monitor))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("exhaustive_unpruned", n),
            &roster,
            |b, roster| {
                let solver = ExhaustiveCrossingSolver::new().with_pruning(false);
                b.iter(|| {
                    let mut monitor = NoOperationMonitor::new();
                    black_box(solver.solve(black_box(roster), &bridge, &mut monitor))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
