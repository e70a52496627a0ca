//! Drag controller - translates an item by whole cells

use crate::{
    DiscardReason, Gesture, GestureFrame, GestureOutcome, GridMetrics, MoveItem, PointerDelta,
};
use grid_model::{GridLayoutData, GridRect, ItemId};
use tracing::debug;

/// Moves one item per gesture, keeping its size.
///
/// Each move proposes the item's original position shifted by the rounded
/// cell delta, clamped into the grid. Proposals that would overlap another
/// item are dropped and the placeholder stays where it was.
#[derive(Debug, Default)]
pub struct DragController {
    frame: Option<GestureFrame>,
}

impl DragController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging item `id`.
    ///
    /// Returns `false` (and stays idle) if the item does not exist.
    pub fn start(&mut self, layout: &GridLayoutData, id: &ItemId) -> bool {
        self.frame = GestureFrame::open(layout, id);
        if let Some(frame) = &self.frame {
            debug!(item = %frame.item_id, origin = %frame.origin, "drag started");
        }
        self.frame.is_some()
    }

    /// Create a controller already dragging item `id`
    pub fn started(layout: &GridLayoutData, id: &ItemId) -> Option<Self> {
        let mut controller = Self::new();
        controller.start(layout, id).then_some(controller)
    }

    /// The rectangle a drag by `delta` would propose, before collision checks
    pub fn candidate(
        origin: GridRect,
        layout: &GridLayoutData,
        metrics: &GridMetrics,
        delta: PointerDelta,
    ) -> GridRect {
        let cells = metrics.cell_delta(delta);
        origin
            .translated(cells.dx, cells.dy)
            .clamp_translation(layout.rows, layout.cols)
    }
}

impl Gesture for DragController {
    fn frame(&self) -> Option<&GestureFrame> {
        self.frame.as_ref()
    }

    fn move_by(
        &mut self,
        layout: &GridLayoutData,
        metrics: &GridMetrics,
        delta: PointerDelta,
    ) -> Option<GridRect> {
        let frame = self.frame.as_mut()?;
        let candidate = Self::candidate(frame.origin, layout, metrics, delta);
        frame.propose(layout, candidate)
    }

    fn end(&mut self, layout: &GridLayoutData) -> GestureOutcome {
        let Some(frame) = self.frame.take() else {
            return GestureOutcome::Discarded(DiscardReason::NotActive);
        };
        let command = MoveItem::new(
            frame.item_id.clone(),
            frame.placeholder.x,
            frame.placeholder.y,
        );
        frame.finish(layout, &command)
    }

    fn cancel(&mut self) -> GestureOutcome {
        match self.frame.take() {
            Some(frame) => {
                debug!(item = %frame.item_id, "drag cancelled");
                GestureOutcome::Discarded(DiscardReason::Cancelled)
            }
            None => GestureOutcome::Discarded(DiscardReason::NotActive),
        }
    }

    fn display_name(&self) -> &str {
        "Drag"
    }
}
