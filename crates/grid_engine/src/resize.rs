//! Resize controller - drags one corner of an item, anchoring the opposite one

use crate::{
    CellDelta, DiscardReason, Gesture, GestureFrame, GestureOutcome, GridMetrics, PointerDelta,
    ResizeItem,
};
use grid_model::{GridLayoutData, GridRect, ItemId, MIN_SPAN};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The corner handle grabbed to resize an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    #[serde(alias = "se")]
    SouthEast,
    #[serde(alias = "sw")]
    SouthWest,
    #[serde(alias = "ne")]
    NorthEast,
    #[serde(alias = "nw")]
    NorthWest,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::SouthEast,
        Corner::SouthWest,
        Corner::NorthEast,
        Corner::NorthWest,
    ];

    /// Whether dragging this corner moves the item's left edge
    pub fn moves_left(&self) -> bool {
        matches!(self, Corner::SouthWest | Corner::NorthWest)
    }

    /// Whether dragging this corner moves the item's top edge
    pub fn moves_top(&self) -> bool {
        matches!(self, Corner::NorthEast | Corner::NorthWest)
    }

    /// The corner that stays fixed
    pub fn anchor(&self) -> Corner {
        match self {
            Corner::SouthEast => Corner::NorthWest,
            Corner::SouthWest => Corner::NorthEast,
            Corner::NorthEast => Corner::SouthWest,
            Corner::NorthWest => Corner::SouthEast,
        }
    }

    /// Apply a cell delta to `origin` as if this corner were dragged.
    ///
    /// On an axis whose far edge moves, the span grows with the delta and is
    /// floored at 1. On an axis whose near edge moves, the span and start
    /// shift together, but only while the span stays at least 1; otherwise
    /// that axis is left as it was so the anchored edge never jumps.
    pub fn resize(&self, origin: GridRect, cells: CellDelta) -> GridRect {
        let (x, w) = if self.moves_left() {
            shift_near_edge(origin.x, origin.w, cells.dx)
        } else {
            (origin.x, origin.w.saturating_add(cells.dx).max(MIN_SPAN))
        };
        let (y, h) = if self.moves_top() {
            shift_near_edge(origin.y, origin.h, cells.dy)
        } else {
            (origin.y, origin.h.saturating_add(cells.dy).max(MIN_SPAN))
        };
        GridRect::new(x, y, w, h)
    }
}

fn shift_near_edge(start: i32, span: i32, delta: i32) -> (i32, i32) {
    let potential = span.saturating_sub(delta);
    if potential >= MIN_SPAN {
        (start.saturating_add(delta), potential)
    } else {
        (start, span)
    }
}

/// Resizes one item per gesture from a grabbed corner.
///
/// Candidates are computed from the original rectangle, clamped into the
/// grid first and then checked for collisions; a colliding candidate is
/// dropped and the placeholder keeps its last valid value.
#[derive(Debug)]
pub struct ResizeController {
    corner: Corner,
    frame: Option<GestureFrame>,
}

impl ResizeController {
    /// Create an idle controller for `corner`
    pub fn new(corner: Corner) -> Self {
        Self {
            corner,
            frame: None,
        }
    }

    /// Start resizing item `id`.
    ///
    /// Returns `false` (and stays idle) if the item does not exist.
    pub fn start(&mut self, layout: &GridLayoutData, id: &ItemId) -> bool {
        self.frame = GestureFrame::open(layout, id);
        if let Some(frame) = &self.frame {
            debug!(item = %frame.item_id, origin = %frame.origin, corner = ?self.corner, "resize started");
        }
        self.frame.is_some()
    }

    /// Create a controller already resizing item `id` from `corner`
    pub fn started(layout: &GridLayoutData, id: &ItemId, corner: Corner) -> Option<Self> {
        let mut controller = Self::new(corner);
        controller.start(layout, id).then_some(controller)
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// The rectangle a resize by `delta` would propose, before collision checks
    pub fn candidate(
        corner: Corner,
        origin: GridRect,
        layout: &GridLayoutData,
        metrics: &GridMetrics,
        delta: PointerDelta,
    ) -> GridRect {
        corner
            .resize(origin, metrics.cell_delta(delta))
            .clamp_extent(layout.rows, layout.cols)
    }
}

impl Gesture for ResizeController {
    fn frame(&self) -> Option<&GestureFrame> {
        self.frame.as_ref()
    }

    fn move_by(
        &mut self,
        layout: &GridLayoutData,
        metrics: &GridMetrics,
        delta: PointerDelta,
    ) -> Option<GridRect> {
        let corner = self.corner;
        let frame = self.frame.as_mut()?;
        let candidate = Self::candidate(corner, frame.origin, layout, metrics, delta);
        frame.propose(layout, candidate)
    }

    fn end(&mut self, layout: &GridLayoutData) -> GestureOutcome {
        let Some(frame) = self.frame.take() else {
            return GestureOutcome::Discarded(DiscardReason::NotActive);
        };
        let command = ResizeItem::new(frame.item_id.clone(), frame.placeholder);
        frame.finish(layout, &command)
    }

    fn cancel(&mut self) -> GestureOutcome {
        match self.frame.take() {
            Some(frame) => {
                debug!(item = %frame.item_id, "resize cancelled");
                GestureOutcome::Discarded(DiscardReason::Cancelled)
            }
            None => GestureOutcome::Discarded(DiscardReason::NotActive),
        }
    }

    fn display_name(&self) -> &str {
        "Resize"
    }
}
