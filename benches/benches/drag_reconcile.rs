// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_drag::tracker::compute_position;
use understory_drag::types::{Handle, InputEvent};
use understory_range::config::{ContinuousConfig, DiscreteConfig};
use understory_range::mode::DiscreteSnap;
use understory_range::reconciler::{NoSink, Reconciler};
use understory_range::slider::RangeSlider;

const TRACK: Rect = Rect::new(40.0, 0.0, 1240.0, 24.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Pointer x coordinates spread past both ends of the track.
fn gen_pointer_xs(count: usize) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| TRACK.x0 - 100.0 + rng.next_f64() * (TRACK.width() + 200.0))
        .collect()
}

fn gen_increasing_values(n: usize) -> Vec<f64> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut v = 0.0;
    (0..n)
        .map(|_| {
            v += 0.01 + rng.next_f64() * 10.0;
            v
        })
        .collect()
}

fn bench_position(c: &mut Criterion) {
    let xs = gen_pointer_xs(4096);
    let mut group = c.benchmark_group("position");
    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("compute_position", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += compute_position(x, Some(TRACK));
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn bench_continuous(c: &mut Criterion) {
    let xs = gen_pointer_xs(4096);
    let mut group = c.benchmark_group("continuous");
    group.throughput(Throughput::Elements(xs.len() as u64));
    for &step in &[1.0_f64, 0.01] {
        group.bench_function(format!("apply_drag_step{step}"), |b| {
            b.iter_batched(
                || {
                    let config = ContinuousConfig::new(0.0, 10_000.0).with_step(step);
                    Reconciler::new(config, NoSink).unwrap()
                },
                |mut r| {
                    for (i, &x) in xs.iter().enumerate() {
                        let handle = if i % 2 == 0 { Handle::Min } else { Handle::Max };
                        black_box(r.apply_drag(handle, compute_position(x, Some(TRACK))));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_discrete(c: &mut Criterion) {
    let xs = gen_pointer_xs(4096);
    let mut group = c.benchmark_group("discrete");
    group.throughput(Throughput::Elements(xs.len() as u64));
    for &n in &[6usize, 64, 1024] {
        let values = gen_increasing_values(n);
        for (label, snap) in [
            ("value", DiscreteSnap::NearestValue),
            ("index", DiscreteSnap::NearestIndex),
        ] {
            group.bench_function(format!("apply_drag_{label}_n{n}"), |b| {
                b.iter_batched(
                    || {
                        let config = DiscreteConfig::new(values.clone()).with_snap(snap);
                        Reconciler::new(config, NoSink).unwrap()
                    },
                    |mut r| {
                        for (i, &x) in xs.iter().enumerate() {
                            let handle = if i % 2 == 0 { Handle::Min } else { Handle::Max };
                            black_box(r.apply_drag(handle, compute_position(x, Some(TRACK))));
                        }
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_slider_session(c: &mut Criterion) {
    let xs = gen_pointer_xs(1024);
    let mut group = c.benchmark_group("slider");
    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("pointer_drag_session", |b| {
        b.iter_batched(
            || RangeSlider::new(ContinuousConfig::new(0.0, 500.0), NoSink).unwrap(),
            |mut s| {
                let down = InputEvent::PointerDown {
                    handle: Handle::Max,
                    point: Point::new(TRACK.x1, 12.0),
                };
                let _ = s.handle_input(down, &TRACK);
                for &x in &xs {
                    let point = Point::new(x, 12.0);
                    black_box(s.handle_input(InputEvent::PointerMove { point }, &TRACK));
                }
                let _ = s.handle_input(InputEvent::PointerUp, &TRACK);
                black_box(s.values())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_position,
    bench_continuous,
    bench_discrete,
    bench_slider_session,
);
criterion_main!(benches);
