// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom resizing on a touch device.
//!
//! Drive `PinchGeometry` directly to show how scaling is capped by the
//! container and nudged back inside, then run the same pinch through an
//! `InteractionHub`.
//!
//! Run:
//! - `cargo run -p understory_drag_resize_demos --example pinch_zoom`

use kurbo::{Rect, Size};
use understory_drag_resize::{
    DeviceClass, ElementConfig, Gesture, InputEvent, InteractionHub, Output,
};
use understory_gesture_geometry::{LayoutSnapshot, PinchGeometry};

fn main() {
    let element = Rect::new(40.0, 40.0, 140.0, 100.0);
    let snapshot =
        LayoutSnapshot::unbounded(element).with_container(Rect::new(0.0, 0.0, 320.0, 240.0));

    let pinch = PinchGeometry::begin(snapshot);
    println!("Center: {:?}", pinch.center());
    for scale in [0.5, 1.0, 1.5, 2.0, 4.0, 10.0] {
        let frame = pinch.step(scale);
        println!(
            "scale {scale:>4} -> applied {:.2}, bounds {:?}",
            frame.scale,
            frame.bounds(element)
        );
    }

    let mut hub = InteractionHub::new(DeviceClass::Mobile);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.attach(7, ElementConfig::resizable(), Size::new(100.0, 60.0), &mut out);
    out.clear();

    hub.push(InputEvent::new(7, Gesture::Tap));
    hub.push(InputEvent::new(7, Gesture::PinchStart));
    hub.push(InputEvent::new(7, Gesture::PinchMove { scale: 1.5 }));
    hub.push(InputEvent::new(7, Gesture::PinchMove { scale: 2.5 }));
    hub.push(InputEvent::new(7, Gesture::PinchEnd));
    hub.process(&|_: &u32| Some(snapshot), &mut out);

    for output in &out {
        match output {
            Output::Style { change, .. } => println!("  {:?}: {}", change.target, change.patch),
            Output::Completed { completion, .. } => println!("  completed: {completion:?}"),
        }
    }
}
