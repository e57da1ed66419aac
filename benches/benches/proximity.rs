// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_proximity::geometry::{Corners, border_distances, distance_to_element};
use understory_proximity::{ProximityMonitor, Side};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A jittery pointer path around a 200x100 element at (100, 100).
fn gen_pointer_path(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * 600.0 - 100.0, rng.next_f64() * 400.0 - 100.0))
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity/geometry");
    let corners = Corners::from_bounds(100.0, 100.0, 200.0, 100.0);
    let path = gen_pointer_path(4_096, 7);
    group.throughput(Throughput::Elements(path.len() as u64));

    group.bench_function("distance_to_element/nearest", |b| {
        b.iter(|| {
            for &p in &path {
                black_box(distance_to_element(p, &corners, None));
            }
        });
    });

    group.bench_function("distance_to_element/top", |b| {
        b.iter(|| {
            for &p in &path {
                black_box(distance_to_element(p, &corners, Some(Side::Top)));
            }
        });
    });

    group.bench_function("border_distances", |b| {
        b.iter(|| {
            for &p in &path {
                black_box(border_distances(p, &corners));
            }
        });
    });

    group.finish();
}

fn bench_pointer_moved(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity/pointer_moved");
    let path = gen_pointer_path(4_096, 11);
    group.throughput(Throughput::Elements(path.len() as u64));

    // 1 = all sides only, 5 = all sides plus every single side.
    for sessions in [1_usize, 5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(sessions),
            &sessions,
            |b, &sessions| {
                let element = Rect::new(100.0, 100.0, 300.0, 200.0);
                let mut monitor =
                    ProximityMonitor::configure(|r: &Rect| *r, Some(element), Some(50.0));
                monitor.start_all(None, None);
                for side in Side::ALL.into_iter().take(sessions - 1) {
                    monitor.start_side(side, None, None);
                }
                b.iter(|| {
                    for &p in &path {
                        let _ = black_box(monitor.pointer_moved(p));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_pointer_moved);
criterion_main!(benches);
