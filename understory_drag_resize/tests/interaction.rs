// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_drag_resize` crate.
//!
//! These drive an `InteractionHub` with scripted gesture sequences and check
//! the completions and style changes it emits.

use kurbo::{Point, Rect, Size, Vec2};
use understory_drag_resize::{
    Completion, DeviceClass, DragComplete, ElementConfig, Gesture, InputEvent, InteractionHub,
    Output, PanTarget, ResizableConfig, ResizeComplete, StylePatch, StyleTarget,
};
use understory_gesture_geometry::{Handle, LayoutSnapshot, ResizeMode};

const CARD: u32 = 1;

fn attach(hub: &mut InteractionHub<u32>, config: ElementConfig, size: Size) {
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.attach(CARD, config, size, &mut out);
}

fn pan(
    hub: &mut InteractionHub<u32>,
    target: PanTarget,
    from: Point,
    to: Point,
    snapshot: LayoutSnapshot,
) -> Vec<Output<u32>> {
    let layout = move |_: &u32| Some(snapshot);
    hub.push(InputEvent::new(CARD, Gesture::PanStart { target, pointer: from }));
    hub.push(InputEvent::new(
        CARD,
        Gesture::PanMove {
            target,
            pointer: to,
            delta: to - from,
        },
    ));
    hub.push(InputEvent::new(CARD, Gesture::PanEnd { target }));
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.process(&layout, &mut out);
    out
}

fn resize_done(out: &[Output<u32>]) -> Option<ResizeComplete> {
    out.iter().find_map(|o| match o {
        Output::Completed {
            completion: Completion::Resize(done),
            ..
        } => Some(*done),
        _ => None,
    })
}

fn drag_done(out: &[Output<u32>]) -> Option<DragComplete> {
    out.iter().find_map(|o| match o {
        Output::Completed {
            completion: Completion::Drag(done),
            ..
        } => Some(*done),
        _ => None,
    })
}

fn focused_hub(device: DeviceClass, config: ElementConfig) -> InteractionHub<u32> {
    let mut hub = InteractionHub::new(device);
    attach(&mut hub, config, Size::new(200.0, 200.0));
    hub.focus(CARD, &mut Vec::<Output<u32>>::new());
    hub
}

#[test]
fn bottom_right_handle_grows_without_moving() {
    let mut hub = focused_hub(DeviceClass::Desktop, ElementConfig::resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let out = pan(
        &mut hub,
        PanTarget::Handle(Handle::BottomRight),
        Point::new(200.0, 200.0),
        Point::new(250.0, 250.0),
        snapshot,
    );
    assert_eq!(
        resize_done(&out),
        Some(ResizeComplete {
            left: 0.0,
            top: 0.0,
            width: 250.0,
            height: 250.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        })
    );
}

#[test]
fn bottom_right_handle_is_capped_by_container() {
    let mut hub = focused_hub(DeviceClass::Desktop, ElementConfig::resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_container(Rect::new(0.0, 0.0, 300.0, 300.0));
    let out = pan(
        &mut hub,
        PanTarget::Handle(Handle::BottomRight),
        Point::new(200.0, 200.0),
        Point::new(700.0, 700.0),
        snapshot,
    );
    let done = resize_done(&out).unwrap();
    assert_eq!((done.left, done.top), (0.0, 0.0));
    assert_eq!((done.width, done.height), (300.0, 300.0));
}

#[test]
fn reversible_top_left_past_anchor_flips_y() {
    let config = ElementConfig::default().with_resizable(ResizableConfig {
        reversible: true,
        ..ResizableConfig::default()
    });
    let mut hub = focused_hub(DeviceClass::Desktop, config);
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let out = pan(
        &mut hub,
        PanTarget::Handle(Handle::TopLeft),
        Point::new(0.0, 0.0),
        Point::new(250.0, 50.0),
        snapshot,
    );

    let flipped = out.iter().any(|o| {
        matches!(
            o,
            Output::Style { change, .. }
                if change.target == StyleTarget::Content
                    && change.patch == StylePatch::ContentRotation { x_deg: 0.0, y_deg: 180.0 }
        )
    });
    assert!(flipped, "content should be mirrored during the gesture");

    let done = resize_done(&out).unwrap();
    assert_eq!((done.rotate_x, done.rotate_y), (0.0, 180.0));
    assert_eq!(
        Rect::new(done.left, done.top, done.left + done.width, done.top + done.height),
        Rect::new(200.0, 50.0, 250.0, 200.0)
    );
}

#[test]
fn crossing_back_and_forth_returns_rotation() {
    let config = ElementConfig::default().with_resizable(ResizableConfig {
        reversible: true,
        ..ResizableConfig::default()
    });
    let mut hub = focused_hub(DeviceClass::Desktop, config);
    let mut element = Rect::new(0.0, 0.0, 200.0, 200.0);

    for round in 1..=6 {
        let out = pan(
            &mut hub,
            PanTarget::Handle(Handle::TopLeft),
            element.origin(),
            Point::new(element.x1 + 50.0, element.y0),
            LayoutSnapshot::unbounded(element),
        );
        let done = resize_done(&out).unwrap();
        let expected = if round % 2 == 0 { 0.0 } else { 180.0 };
        assert_eq!(done.rotate_y, expected, "round {round}");
        assert_eq!(done.rotate_x, 0.0);
        element = Rect::new(done.left, done.top, done.left + done.width, done.top + done.height);
    }
}

#[test]
fn aspect_lock_keeps_ratio() {
    let config = ElementConfig::default().with_resizable(ResizableConfig {
        mode: ResizeMode::AspectLocked,
        ..ResizableConfig::default()
    });
    let mut hub = focused_hub(DeviceClass::Desktop, config);
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 100.0));
    for to in [Point::new(260.0, 90.0), Point::new(150.0, 400.0), Point::new(-80.0, -30.0)] {
        let out = pan(
            &mut hub,
            PanTarget::Handle(Handle::BottomRight),
            Point::new(200.0, 100.0),
            to,
            snapshot,
        );
        let done = resize_done(&out).unwrap();
        assert!((done.height / done.width - 0.5).abs() < 1e-9, "{done:?}");
    }

    // Edge handles are disabled while locked.
    let out = pan(
        &mut hub,
        PanTarget::Handle(Handle::Right),
        Point::new(200.0, 50.0),
        Point::new(260.0, 50.0),
        snapshot,
    );
    assert!(out.is_empty());
}

#[test]
fn resize_is_ignored_until_focused() {
    let mut hub = InteractionHub::new(DeviceClass::Desktop);
    attach(&mut hub, ElementConfig::resizable(), Size::new(200.0, 200.0));
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let handle = PanTarget::Handle(Handle::BottomRight);

    let out = pan(
        &mut hub,
        handle,
        Point::new(200.0, 200.0),
        Point::new(250.0, 250.0),
        snapshot,
    );
    assert!(out.is_empty());

    let layout = move |_: &u32| Some(snapshot);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.dispatch(InputEvent::new(CARD, Gesture::Tap), &layout, &mut out);
    assert!(out.contains(&Output::Style {
        element: CARD,
        change: understory_drag_resize::StyleChange {
            target: StyleTarget::Handles,
            patch: StylePatch::Visible(true),
        },
    }));

    let out = pan(
        &mut hub,
        handle,
        Point::new(200.0, 200.0),
        Point::new(250.0, 250.0),
        snapshot,
    );
    assert!(resize_done(&out).is_some());
}

#[test]
fn drag_stays_inside_container() {
    let mut hub = InteractionHub::new(DeviceClass::Desktop);
    attach(&mut hub, ElementConfig::draggable(), Size::new(100.0, 50.0));
    let container = Rect::new(0.0, 0.0, 300.0, 300.0);
    let element = Rect::new(40.0, 40.0, 140.0, 90.0);
    let snapshot = LayoutSnapshot::unbounded(element).with_container(container);

    for delta in [
        Vec2::new(1000.0, 1000.0),
        Vec2::new(-1000.0, 30.0),
        Vec2::new(10.0, -1000.0),
        Vec2::new(-20.0, -20.0),
    ] {
        let from = Point::new(60.0, 60.0);
        let out = pan(&mut hub, PanTarget::Body, from, from + delta, snapshot);
        let done = drag_done(&out).unwrap();
        let moved = Rect::from_origin_size((done.left, done.top), element.size());
        assert!(
            moved.x0 >= container.x0
                && moved.y0 >= container.y0
                && moved.x1 <= container.x1
                && moved.y1 <= container.y1,
            "{moved:?} escaped for {delta:?}"
        );
    }
}

#[test]
fn drag_without_move_does_not_complete() {
    let mut hub = InteractionHub::new(DeviceClass::Desktop);
    attach(&mut hub, ElementConfig::draggable(), Size::new(100.0, 100.0));
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 100.0, 100.0));
    let layout = move |_: &u32| Some(snapshot);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.push(InputEvent::new(
        CARD,
        Gesture::PanStart {
            target: PanTarget::Body,
            pointer: Point::new(10.0, 10.0),
        },
    ));
    hub.push(InputEvent::new(
        CARD,
        Gesture::PanEnd {
            target: PanTarget::Body,
        },
    ));
    hub.process(&layout, &mut out);
    assert_eq!(drag_done(&out), None);
}

#[test]
fn resize_start_cancels_drag() {
    let mut hub = focused_hub(DeviceClass::Desktop, ElementConfig::draggable_and_resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let layout = move |_: &u32| Some(snapshot);
    let mut out: Vec<Output<u32>> = Vec::new();

    hub.dispatch(
        InputEvent::new(
            CARD,
            Gesture::PanStart {
                target: PanTarget::Body,
                pointer: Point::new(100.0, 100.0),
            },
        ),
        &layout,
        &mut out,
    );
    hub.dispatch(
        InputEvent::new(
            CARD,
            Gesture::PanMove {
                target: PanTarget::Body,
                pointer: Point::new(110.0, 100.0),
                delta: Vec2::new(10.0, 0.0),
            },
        ),
        &layout,
        &mut out,
    );
    hub.dispatch(
        InputEvent::new(
            CARD,
            Gesture::PanStart {
                target: PanTarget::Handle(Handle::BottomRight),
                pointer: Point::new(200.0, 200.0),
            },
        ),
        &layout,
        &mut out,
    );
    assert!(
        out.contains(&Output::Style {
            element: CARD,
            change: understory_drag_resize::StyleChange {
                target: StyleTarget::Element,
                patch: StylePatch::Translate(Vec2::ZERO),
            },
        }),
        "canceled drag should reset its translation"
    );

    // The drag's release no longer completes anything.
    out.clear();
    hub.dispatch(
        InputEvent::new(
            CARD,
            Gesture::PanEnd {
                target: PanTarget::Body,
            },
        ),
        &layout,
        &mut out,
    );
    assert_eq!(drag_done(&out), None);
}

#[test]
fn pinch_on_mobile_scales_inside_container() {
    let mut hub = focused_hub(DeviceClass::Mobile, ElementConfig::resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(100.0, 100.0, 200.0, 200.0))
        .with_container(Rect::new(0.0, 0.0, 300.0, 300.0));
    let layout = move |_: &u32| Some(snapshot);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.push(InputEvent::new(CARD, Gesture::PinchStart));
    hub.push(InputEvent::new(CARD, Gesture::PinchMove { scale: 5.0 }));
    hub.push(InputEvent::new(CARD, Gesture::PinchEnd));
    hub.process(&layout, &mut out);
    assert_eq!(
        resize_done(&out),
        Some(ResizeComplete {
            left: 0.0,
            top: 0.0,
            width: 300.0,
            height: 300.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        })
    );
}

#[test]
fn pinch_preempts_pan_resize() {
    let mut hub = focused_hub(DeviceClass::Mobile, ElementConfig::resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let layout = move |_: &u32| Some(snapshot);
    let handle = PanTarget::Handle(Handle::Bottom);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.push(InputEvent::new(
        CARD,
        Gesture::PanStart {
            target: handle,
            pointer: Point::new(100.0, 200.0),
        },
    ));
    hub.push(InputEvent::new(
        CARD,
        Gesture::PanMove {
            target: handle,
            pointer: Point::new(100.0, 260.0),
            delta: Vec2::new(0.0, 60.0),
        },
    ));
    hub.push(InputEvent::new(CARD, Gesture::PinchStart));
    hub.push(InputEvent::new(CARD, Gesture::PanEnd { target: handle }));
    hub.push(InputEvent::new(CARD, Gesture::PinchMove { scale: 0.5 }));
    hub.push(InputEvent::new(CARD, Gesture::PinchEnd));
    hub.process(&layout, &mut out);

    let completions: Vec<_> = out
        .iter()
        .filter_map(|o| match o {
            Output::Completed { completion, .. } => Some(*completion),
            Output::Style { .. } => None,
        })
        .collect();
    assert_eq!(
        completions,
        [Completion::Resize(ResizeComplete {
            left: 50.0,
            top: 50.0,
            width: 100.0,
            height: 100.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        })]
    );
}

#[test]
fn pinch_is_not_bound_on_desktop() {
    let mut hub = focused_hub(DeviceClass::Desktop, ElementConfig::resizable());
    let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
    let layout = move |_: &u32| Some(snapshot);
    let mut out: Vec<Output<u32>> = Vec::new();
    hub.push(InputEvent::new(CARD, Gesture::PinchStart));
    hub.push(InputEvent::new(CARD, Gesture::PinchMove { scale: 2.0 }));
    hub.push(InputEvent::new(CARD, Gesture::PinchEnd));
    hub.process(&layout, &mut out);
    assert!(out.is_empty());
}
