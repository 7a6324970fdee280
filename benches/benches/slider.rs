// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use understory_slider::{
    Limits, Orientation, Slider, SliderConfig, SliderFlags, SliderRange, StepMarker, Track,
    ValueEngine,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_fraction(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn positions(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_fraction()).collect()
}

fn engines() -> [(&'static str, ValueEngine); 4] {
    let range = SliderRange::new(0.0, 100.0);
    let base = SliderConfig::default()
        .with_range(range)
        .with_limits(Limits::new(5.0, 95.0));
    [
        ("continuous", base.validate().unwrap()),
        ("snap", base.with_step(2.5).validate().unwrap()),
        (
            "deferred",
            base.with_step(2.5)
                .with_deferred_snap(0.0001, None)
                .validate()
                .unwrap(),
        ),
        (
            "deferred_threshold",
            base.with_step(2.5)
                .with_deferred_snap(0.0001, Some(0.5))
                .validate()
                .unwrap(),
        ),
    ]
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/engine");
    let ps = positions(4_096, 0x5EED);
    group.throughput(Throughput::Elements(ps.len() as u64));

    for (name, engine) in engines() {
        group.bench_with_input(BenchmarkId::new("live_value", name), &ps, |b, ps| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in ps {
                    acc += engine.live_value(black_box(p));
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("final_value", name), &ps, |b, ps| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in ps {
                    acc += engine.final_value(black_box(p));
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag");
    let track = Track::from_rect(Rect::new(0.0, 0.0, 800.0, 32.0), Orientation::Horizontal);
    let xs: Vec<f64> = positions(1_024, 42).into_iter().map(|p| p * 800.0).collect();
    group.throughput(Throughput::Elements(xs.len() as u64));

    for (name, engine) in engines() {
        group.bench_with_input(BenchmarkId::new("gesture", name), &xs, |b, xs| {
            b.iter_batched(
                || Slider::new(engine, 50.0, SliderFlags::empty()),
                |mut slider| {
                    let mut events = 0_usize;
                    events += slider.begin_drag().len();
                    for &x in xs {
                        events += slider.drag_to_point(&track, Point::new(x, 16.0)).len();
                    }
                    events += slider.end_drag().len();
                    black_box(events)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_step_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/step_markers");

    for steps in [10_u32, 100, 1_000] {
        let engine = SliderConfig::default()
            .with_range(SliderRange::new(0.0, f64::from(steps)))
            .with_step(1.0)
            .validate()
            .unwrap();
        group.throughput(Throughput::Elements(u64::from(steps) + 1));

        group.bench_with_input(BenchmarkId::from_parameter(steps), &engine, |b, engine| {
            b.iter(|| {
                let mut marked = 0_usize;
                engine.render_step_markers(black_box(3.0), &mut |m: &StepMarker| {
                    marked += usize::from(m.step_marked);
                });
                black_box(marked)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine, bench_drag_session, bench_step_markers);
criterion_main!(benches);
