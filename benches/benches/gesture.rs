// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use vitrine_gesture::classify::GestureClassifier;

const SURFACE: Rect = Rect::new(0.0, 0.0, 400.0, 500.0);

/// Pointer path from (320, 250) with `moves` samples along `(dx, dy)` per step.
fn path(moves: usize, dx: f64, dy: f64) -> Vec<Point> {
    (1..=moves)
        .map(|i| Point::new(320.0 + dx * i as f64, 250.0 + dy * i as f64))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");

    // High-rate pointers deliver many move events per gesture; classification
    // should stay flat per event once the axis is locked.
    for moves in [4_usize, 32, 256] {
        group.throughput(Throughput::Elements(moves as u64));
        for (name, dx, dy) in [("swipe", -2.0, 0.1), ("scroll", 0.1, 2.0), ("diagonal", 1.0, 1.0)] {
            let points = path(moves, dx, dy);
            group.bench_with_input(BenchmarkId::new(name, moves), &points, |b, points| {
                let mut gestures = GestureClassifier::default();
                b.iter(|| {
                    gestures.press(Point::new(320.0, 250.0), 0);
                    for (t, &p) in points.iter().enumerate() {
                        black_box(gestures.motion(p, t as u64));
                    }
                    let end = points.last().copied().unwrap_or(Point::ORIGIN);
                    black_box(gestures.release(end, points.len() as u64, SURFACE))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
