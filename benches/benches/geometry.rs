// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_gesture_geometry::{
    Handle, LayoutSnapshot, PinchGeometry, ResizeGeometry, ResizeMode,
};

/// Pointer positions on a circle around the element, crossing every quadrant.
fn sweep(center: Point, radius: f64, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let angle = i as f64 / steps as f64 * core::f64::consts::TAU;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

fn bench_resize_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/resize_step");
    let element = Rect::new(100.0, 100.0, 300.0, 250.0);
    let bounded =
        LayoutSnapshot::unbounded(element).with_container(Rect::new(0.0, 0.0, 400.0, 400.0));
    let pointers = sweep(element.center(), 180.0, 1_024);
    group.throughput(Throughput::Elements(pointers.len() as u64));

    for (name, mode) in [("free", ResizeMode::Free), ("locked", ResizeMode::AspectLocked)] {
        for handle in [Handle::TopLeft, Handle::Right, Handle::BottomRight] {
            let geometry = ResizeGeometry::begin(handle.spec(), bounded, mode, element.origin());
            group.bench_with_input(
                BenchmarkId::new(name, format!("{handle:?}")),
                &pointers,
                |b, pointers| {
                    b.iter(|| {
                        for &p in pointers {
                            black_box(geometry.step(black_box(p)));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_pinch_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/pinch_step");
    let element = Rect::new(100.0, 100.0, 200.0, 160.0);
    let scales: Vec<f64> = (0..1_024).map(|i| 0.25 + i as f64 / 256.0).collect();
    group.throughput(Throughput::Elements(scales.len() as u64));

    for (name, snapshot) in [
        ("unbounded", LayoutSnapshot::unbounded(element)),
        (
            "bounded",
            LayoutSnapshot::unbounded(element).with_container(Rect::new(0.0, 0.0, 320.0, 240.0)),
        ),
    ] {
        let pinch = PinchGeometry::begin(snapshot);
        group.bench_with_input(BenchmarkId::from_parameter(name), &scales, |b, scales| {
            b.iter(|| {
                for &s in scales {
                    black_box(pinch.step(black_box(s)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize_step, bench_pinch_step);
criterion_main!(benches);
