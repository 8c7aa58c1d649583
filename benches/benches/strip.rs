// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vitrine_scroll::{CardLayout, DragScroll, FocusRow, ScrollStrip};

fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip/fling");

    for step in [5.0_f64, 40.0] {
        group.bench_with_input(BenchmarkId::new("drag_release", step), &step, |b, &step| {
            b.iter(|| {
                let mut strip = ScrollStrip::for_cards(375.0, 48, &CardLayout::GEAR_ROW);
                let mut drag = DragScroll::default();
                drag.begin(300.0, 0, &strip);
                for frame in 1..=10_u64 {
                    drag.drag(300.0 - step * frame as f64, frame * 16, &mut strip);
                }
                if let Some(mut fling) = drag.end() {
                    while fling.step(&mut strip) {}
                }
                black_box(strip.offset())
            });
        });
    }

    group.finish();
}

fn bench_focus(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip/focus");

    // Focus metrics are recomputed for every visible card on every frame.
    for count in [12_usize, 96] {
        let row = FocusRow::for_viewport(390.0);
        group.bench_with_input(BenchmarkId::new("metrics", count), &count, |b, &count| {
            b.iter(|| {
                let mut total = 0.0;
                for i in 0..count {
                    total += row.metrics(i, black_box(250.0)).scale;
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fling, bench_focus);
criterion_main!(benches);
