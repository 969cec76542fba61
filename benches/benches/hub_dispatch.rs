// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};
use understory_drag_resize::{
    DeviceClass, ElementConfig, Gesture, InputEvent, InteractionHub, Output, OutputSink,
    PanTarget, StyleChange,
};
use understory_gesture_geometry::{Handle, LayoutSnapshot};

/// Counts outputs without storing them.
#[derive(Default)]
struct Counter(usize);

impl OutputSink<u32> for Counter {
    fn style(&mut self, _: &u32, change: StyleChange) {
        black_box(change);
        self.0 += 1;
    }

    fn completed(&mut self, _: &u32, completion: understory_drag_resize::Completion) {
        black_box(completion);
        self.0 += 1;
    }
}

fn hub_with(elements: u32) -> InteractionHub<u32> {
    let mut hub = InteractionHub::new(DeviceClass::Desktop);
    let mut out: Vec<Output<u32>> = Vec::new();
    for key in 0..elements {
        hub.attach(
            key,
            ElementConfig::draggable_and_resizable(),
            Size::new(120.0, 80.0),
            &mut out,
        );
    }
    hub.focus(0, &mut out);
    hub
}

fn layout(key: &u32) -> Option<LayoutSnapshot> {
    let x = f64::from(*key % 8) * 130.0;
    let element = Rect::new(x, 0.0, x + 120.0, 80.0);
    Some(LayoutSnapshot::unbounded(element).with_container(Rect::new(0.0, 0.0, 1_200.0, 800.0)))
}

fn queue_gesture(hub: &mut InteractionHub<u32>, target: PanTarget, moves: usize) {
    let start = Point::new(120.0, 80.0);
    hub.push(InputEvent::new(0, Gesture::PanStart { target, pointer: start }));
    for i in 0..moves {
        let delta = Vec2::new(i as f64 * 0.5, i as f64 * 0.25);
        hub.push(InputEvent::new(
            0,
            Gesture::PanMove {
                target,
                pointer: start + delta,
                delta,
            },
        ));
    }
    hub.push(InputEvent::new(0, Gesture::PanEnd { target }));
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("hub/process");
    let moves = 256;
    group.throughput(Throughput::Elements(moves as u64 + 2));

    // Resize starts poll every element's conflict cursor, so population matters.
    for elements in [1_u32, 64, 1_024] {
        for (name, target) in [
            ("drag", PanTarget::Body),
            ("resize", PanTarget::Handle(Handle::BottomRight)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, elements), &elements, |b, &n| {
                b.iter_batched(
                    || {
                        let mut hub = hub_with(n);
                        queue_gesture(&mut hub, target, moves);
                        hub
                    },
                    |mut hub| {
                        let mut sink = Counter::default();
                        hub.process(&layout, &mut sink);
                        black_box(sink.0);
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
