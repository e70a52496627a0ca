//! Integration tests for the grid editing engine
//!
//! These drive the `Canvas` the way a host would, one pointer input at a
//! time, and check the layout invariants that must hold for every
//! committed document:
//!
//! 1. No two items overlap
//! 2. Every item lies inside the grid
//! 3. A drag with zero net travel commits nothing
//! 4. A drag onto another item is rejected
//! 5. Resizing from a corner keeps the opposite corner fixed
//! 6. Drags clamp at the grid boundary
//! 7. A layout survives a JSON round trip through the engine

use grid_engine::{Canvas, CanvasEvent, CanvasInput, Corner, Point, PointerTarget};
use grid_model::{starter_layout, GridItem, GridLayoutData, GridRect, ItemId, WidgetKind};
use proptest::prelude::*;

/// Pixel width at which `cols` columns get 84px cells, i.e. a 100px step
fn width_for(cols: i32) -> f64 {
    cols as f64 * 100.0 - 16.0
}

fn canvas_for(layout: GridLayoutData) -> Canvas {
    let width = width_for(layout.cols);
    let mut canvas = Canvas::new(layout);
    canvas.dispatch(CanvasInput::ContainerResized { width });
    canvas
}

fn two_items() -> GridLayoutData {
    GridLayoutData::with_items(
        4,
        4,
        vec![
            GridItem::new("first", GridRect::new(1, 1, 2, 2), WidgetKind::text("first")),
            GridItem::new("second", GridRect::new(3, 1, 2, 2), WidgetKind::image("img")),
        ],
    )
}

/// Full press, travel and release on an item body, in grid cells
fn drag(canvas: &mut Canvas, id: &str, dx: i32, dy: i32) -> Vec<CanvasEvent> {
    let end = Point::new(dx as f64 * 100.0, dy as f64 * 100.0);
    canvas.dispatch_all([
        CanvasInput::PointerDown {
            target: PointerTarget::Item { item_id: id.into() },
            at: Point::new(0.0, 0.0),
        },
        // Past the activation distance whatever the final delta is
        CanvasInput::PointerMove {
            at: Point::new(0.0, 20.0),
        },
        CanvasInput::PointerMove { at: end },
        CanvasInput::PointerUp { at: end },
    ])
}

fn resize(canvas: &mut Canvas, id: &str, corner: Corner, dx: i32, dy: i32) -> Vec<CanvasEvent> {
    let end = Point::new(dx as f64 * 100.0, dy as f64 * 100.0);
    canvas.dispatch_all([
        CanvasInput::PointerDown {
            target: PointerTarget::Handle {
                item_id: id.into(),
                corner,
            },
            at: Point::new(0.0, 0.0),
        },
        CanvasInput::PointerMove { at: end },
        CanvasInput::PointerUp { at: end },
    ])
}

fn rect_of(canvas: &Canvas, id: &str) -> GridRect {
    canvas
        .layout()
        .item(&ItemId::from(id))
        .map(|item| item.rect())
        .expect("item should exist")
}

fn assert_invariants(layout: &GridLayoutData) {
    for item in &layout.items {
        let rect = item.rect();
        assert!(rect.x >= 1 && rect.y >= 1, "{} starts outside the grid", item.id);
        assert!(rect.right() <= layout.cols, "{} overflows the columns", item.id);
        assert!(rect.bottom() <= layout.rows, "{} overflows the rows", item.id);
        assert!(rect.w >= 1 && rect.h >= 1, "{} has an empty span", item.id);
    }
    for (i, a) in layout.items.iter().enumerate() {
        for b in &layout.items[i + 1..] {
            assert!(!a.rect().overlaps(&b.rect()), "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn test_zero_net_drag_is_a_no_op() {
    let mut canvas = canvas_for(two_items());
    let before = canvas.layout().clone();

    let events = canvas.dispatch_all([
        CanvasInput::PointerDown {
            target: PointerTarget::Item {
                item_id: "first".into(),
            },
            at: Point::new(10.0, 10.0),
        },
        CanvasInput::PointerMove {
            at: Point::new(10.0, 210.0),
        },
        CanvasInput::PointerMove {
            at: Point::new(30.0, 10.0),
        },
        CanvasInput::PointerUp {
            at: Point::new(10.0, 10.0),
        },
    ]);

    assert!(events.is_empty());
    assert_eq!(canvas.layout(), &before);
}

#[test]
fn test_drag_onto_neighbour_is_rejected() {
    let mut canvas = canvas_for(two_items());

    let events = drag(&mut canvas, "first", 2, 0);

    assert!(events.is_empty());
    assert_eq!(rect_of(&canvas, "first"), GridRect::new(1, 1, 2, 2));
    assert_eq!(rect_of(&canvas, "second"), GridRect::new(3, 1, 2, 2));
}

#[test]
fn test_northwest_resize_keeps_southeast_corner() {
    let layout = GridLayoutData::with_items(
        6,
        6,
        vec![GridItem::new("box", GridRect::new(3, 3, 2, 2), WidgetKind::text("box"))],
    );
    let mut canvas = canvas_for(layout);

    let events = resize(&mut canvas, "box", Corner::NorthWest, -1, -1);

    assert_eq!(events.len(), 1);
    let rect = rect_of(&canvas, "box");
    assert_eq!(rect, GridRect::new(2, 2, 3, 3));
    assert_eq!((rect.right(), rect.bottom()), (4, 4));
}

#[test]
fn test_drag_clamps_at_left_boundary() {
    let layout = GridLayoutData::with_items(
        4,
        4,
        vec![GridItem::new("box", GridRect::new(1, 1, 2, 2), WidgetKind::text("box"))],
    );
    let mut canvas = canvas_for(layout);

    let events = drag(&mut canvas, "box", -5, 0);

    assert!(events.is_empty());
    assert_eq!(rect_of(&canvas, "box"), GridRect::new(1, 1, 2, 2));
}

#[test]
fn test_drag_clamps_and_commits_at_far_boundary() {
    let mut canvas = canvas_for(two_items());

    let events = drag(&mut canvas, "first", 0, 7);

    assert_eq!(events.len(), 1);
    assert_eq!(rect_of(&canvas, "first"), GridRect::new(1, 3, 2, 2));
}

#[test]
fn test_round_trip_through_engine() {
    let layout = starter_layout();
    let json = serde_json::to_string_pretty(&layout).unwrap();
    let restored: GridLayoutData = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, layout);
    assert!(restored.validate().is_ok());

    let canvas = canvas_for(restored);
    assert_eq!(canvas.layout().items, layout.items);
}

#[test]
fn test_committed_update_matches_canvas_layout() {
    let mut canvas = canvas_for(two_items());

    let events = drag(&mut canvas, "second", 0, 2);

    let [CanvasEvent::Update { layout }] = events.as_slice() else {
        panic!("expected a single update, got {events:?}");
    };
    assert_eq!(layout, canvas.layout());
    assert_eq!(rect_of(&canvas, "second"), GridRect::new(3, 3, 2, 2));
    // Item order is preserved across commits
    let ids: Vec<_> = layout.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn test_click_after_failed_drag_does_not_select() {
    let mut canvas = canvas_for(two_items());

    let events = drag(&mut canvas, "first", 2, 0);

    assert!(events.is_empty());
    assert!(canvas.selected().is_none());
}

// ── Property tests ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Gesture {
    Drag { item: usize, dx: f64, dy: f64 },
    Resize { item: usize, corner: Corner, dx: f64, dy: f64 },
}

fn corner_strategy() -> impl Strategy<Value = Corner> {
    prop_oneof![
        Just(Corner::SouthEast),
        Just(Corner::SouthWest),
        Just(Corner::NorthEast),
        Just(Corner::NorthWest),
    ]
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    let travel = -1200.0f64..1200.0;
    prop_oneof![
        (0usize..8, travel.clone(), travel.clone())
            .prop_map(|(item, dx, dy)| Gesture::Drag { item, dx, dy }),
        (0usize..8, corner_strategy(), travel.clone(), travel)
            .prop_map(|(item, corner, dx, dy)| Gesture::Resize { item, corner, dx, dy }),
    ]
}

fn play(canvas: &mut Canvas, gesture: &Gesture) -> Vec<CanvasEvent> {
    let ids: Vec<ItemId> = canvas.layout().items.iter().map(|item| item.id.clone()).collect();
    let (target, dx, dy) = match gesture {
        Gesture::Drag { item, dx, dy } => (
            PointerTarget::Item {
                item_id: ids[item % ids.len()].clone(),
            },
            *dx,
            *dy,
        ),
        Gesture::Resize {
            item,
            corner,
            dx,
            dy,
        } => (
            PointerTarget::Handle {
                item_id: ids[item % ids.len()].clone(),
                corner: *corner,
            },
            *dx,
            *dy,
        ),
    };
    canvas.dispatch_all([
        CanvasInput::PointerDown {
            target,
            at: Point::new(0.0, 0.0),
        },
        CanvasInput::PointerMove {
            at: Point::new(dx / 2.0, dy / 2.0),
        },
        CanvasInput::PointerMove {
            at: Point::new(dx, dy),
        },
        CanvasInput::PointerUp {
            at: Point::new(dx, dy),
        },
    ])
}

proptest! {
    #[test]
    fn committed_layouts_keep_invariants(
        gestures in prop::collection::vec(gesture_strategy(), 1..40)
    ) {
        let mut canvas = canvas_for(starter_layout());
        for gesture in &gestures {
            let events = play(&mut canvas, gesture);
            prop_assert!(events.len() <= 1);
            for event in &events {
                if let CanvasEvent::Update { layout } = event {
                    assert_invariants(layout);
                    prop_assert!(layout.validate().is_ok());
                }
            }
            prop_assert!(!canvas.is_gesture_active());
        }
        assert_invariants(canvas.layout());
        prop_assert_eq!(canvas.layout().items.len(), starter_layout().items.len());
    }

    #[test]
    fn drags_preserve_item_size(
        item in 0usize..5,
        dx in -1500.0f64..1500.0,
        dy in -1500.0f64..1500.0,
    ) {
        let mut canvas = canvas_for(starter_layout());
        let before = canvas.layout().items[item].rect();
        play(&mut canvas, &Gesture::Drag { item, dx, dy });
        let after = canvas.layout().items[item].rect();
        prop_assert_eq!((after.w, after.h), (before.w, before.h));
    }

    #[test]
    fn resizes_keep_the_anchor_corner(
        item in 0usize..5,
        corner in corner_strategy(),
        dx in -1500.0f64..1500.0,
        dy in -1500.0f64..1500.0,
    ) {
        let mut canvas = canvas_for(starter_layout());
        let before = canvas.layout().items[item].rect();
        play(&mut canvas, &Gesture::Resize { item, corner, dx, dy });
        let after = canvas.layout().items[item].rect();

        if corner.moves_left() {
            prop_assert_eq!(after.right(), before.right());
        } else {
            prop_assert_eq!(after.x, before.x);
        }
        if corner.moves_top() {
            prop_assert_eq!(after.bottom(), before.bottom());
        } else {
            prop_assert_eq!(after.y, before.y);
        }
    }
}
