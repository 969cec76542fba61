// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and resize session basics.
//!
//! Script a short desktop session over two cards: focus one, drag it into a
//! corner, resize it past its own anchor so its content flips, then try to
//! resize the unfocused card. Style changes are printed as CSS.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_drag_resize_demos --example card_session`

use std::collections::HashMap;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_drag_resize::trace::TracingTrace;
use understory_drag_resize::{
    Completion, DeviceClass, ElementConfig, Gesture, InputEvent, InteractionHub, Output,
    PanTarget, ResizableConfig,
};
use understory_gesture_geometry::{Handle, LayoutSnapshot};

/// Committed geometry of each card, container-relative.
struct Board {
    container: Rect,
    cards: HashMap<&'static str, Rect>,
}

impl Board {
    fn snapshot(&self, key: &&'static str) -> Option<LayoutSnapshot> {
        let rect = *self.cards.get(key)?;
        Some(
            LayoutSnapshot::unbounded(rect)
                .with_container(self.container)
                .with_offset(rect.origin()),
        )
    }

    fn commit(&mut self, key: &'static str, completion: Completion) {
        let Some(rect) = self.cards.get_mut(key) else {
            return;
        };
        *rect = match completion {
            Completion::Drag(done) => Rect::from_origin_size((done.left, done.top), rect.size()),
            Completion::Resize(done) => {
                Rect::from_origin_size((done.left, done.top), (done.width, done.height))
            }
        };
    }
}

fn pan(
    hub: &mut InteractionHub<&'static str>,
    key: &'static str,
    target: PanTarget,
    from: Point,
    to: Point,
) {
    hub.push(InputEvent::new(key, Gesture::PanStart { target, pointer: from }));
    hub.push(InputEvent::new(
        key,
        Gesture::PanMove {
            target,
            pointer: to,
            delta: to - from,
        },
    ));
    hub.push(InputEvent::new(key, Gesture::PanEnd { target }));
}

fn flush(hub: &mut InteractionHub<&'static str>, board: &mut Board) {
    let mut out: Vec<Output<&'static str>> = Vec::new();
    let layout = |key: &&'static str| board.snapshot(key);
    hub.process_with_trace(&layout, &mut out, &mut TracingTrace);
    for output in out {
        match output {
            Output::Style { element, change } => {
                println!("  {element} {:?}: {}", change.target, change.patch);
            }
            Output::Completed { element, completion } => {
                println!("  {element} completed: {completion:?}");
                board.commit(element, completion);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut board = Board {
        container: Rect::new(0.0, 0.0, 600.0, 400.0),
        cards: HashMap::from([
            ("note", Rect::new(100.0, 100.0, 300.0, 250.0)),
            ("photo", Rect::new(350.0, 100.0, 500.0, 200.0)),
        ]),
    };

    let mut hub = InteractionHub::new(DeviceClass::Desktop);
    let mut out: Vec<Output<&'static str>> = Vec::new();
    let reversible = ElementConfig::draggable().with_resizable(ResizableConfig {
        reversible: true,
        ..ResizableConfig::default()
    });
    hub.attach("note", reversible, Size::new(200.0, 150.0), &mut out);
    hub.attach(
        "photo",
        ElementConfig::draggable_and_resizable(),
        Size::new(150.0, 100.0),
        &mut out,
    );
    println!("Attached {} cards ({} style changes)", hub.len(), out.len());

    println!("Tap the note:");
    hub.push(InputEvent::new("note", Gesture::Tap));
    flush(&mut hub, &mut board);

    println!("Drag the note far past the top-left corner:");
    pan(
        &mut hub,
        "note",
        PanTarget::Body,
        Point::new(150.0, 150.0),
        Point::new(-200.0, -90.0),
    );
    flush(&mut hub, &mut board);

    let note = board.cards["note"];
    println!("Pull its top-left handle across the anchor:");
    pan(
        &mut hub,
        "note",
        PanTarget::Handle(Handle::TopLeft),
        note.origin(),
        Point::new(note.x1 + 80.0, note.y0 + 20.0),
    );
    flush(&mut hub, &mut board);

    println!("Resize the unfocused photo (ignored):");
    pan(
        &mut hub,
        "photo",
        PanTarget::Handle(Handle::BottomRight),
        Point::new(500.0, 200.0),
        Point::new(550.0, 250.0),
    );
    flush(&mut hub, &mut board);

    for (key, rect) in &board.cards {
        println!("{key}: {rect:?}");
    }
}
