// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use vitrine_carousel::{Carousel, CarouselConfig};

fn bench_request_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/flood");

    // Bursts of requests inside one cooldown: all but the first are dropped.
    for burst in [16_u64, 256, 4_096] {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(BenchmarkId::new("next", burst), &burst, |b, &burst| {
            b.iter_batched(
                || Carousel::new(0..12_u32, CarouselConfig::default()).unwrap(),
                |mut carousel| {
                    for t in 0..burst {
                        black_box(carousel.next(t % 300));
                    }
                    carousel
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/frame");

    for len in [4_u32, 64] {
        group.bench_with_input(BenchmarkId::new("transition", len), &len, |b, &len| {
            let mut carousel = Carousel::new(0..len, CarouselConfig::default()).unwrap();
            carousel.next(0);
            b.iter(|| {
                // One 60Hz frame budget worth of interpolations.
                for t in (0..300).step_by(16) {
                    black_box(carousel.frame(t));
                }
                black_box(carousel.dots().filter(|d| d.active).count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_request_flood, bench_frames);
criterion_main!(benches);
