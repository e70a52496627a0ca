//! Shared gesture state and the gesture controller trait
//!
//! A gesture is one pointer-down, pointer-move*, pointer-up interaction on a
//! single item. Its state lives in a `GestureFrame` created at `start` and
//! threaded through every move: the item's committed rectangle (the
//! reference frame every pointer delta is measured against) and the last
//! valid proposal (the placeholder).

use crate::{Command, GridMetrics, PointerDelta};
use grid_model::{GridLayoutData, GridRect, ItemId};
use tracing::{debug, trace};

/// State of one in-progress gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureFrame {
    /// Item being manipulated
    pub item_id: ItemId,
    /// Committed rectangle at gesture start
    pub origin: GridRect,
    /// Last accepted candidate
    pub placeholder: GridRect,
}

impl GestureFrame {
    /// Open a frame on item `id`, or `None` if the layout has no such item
    pub fn open(layout: &GridLayoutData, id: &ItemId) -> Option<Self> {
        let item = layout.item(id)?;
        Some(Self {
            item_id: item.id.clone(),
            origin: item.rect(),
            placeholder: item.rect(),
        })
    }

    /// Offer a clamped candidate rectangle.
    ///
    /// Returns the new placeholder when accepted. A candidate equal to the
    /// current placeholder, or one that leaves the grid or overlaps another
    /// item, leaves the placeholder untouched and returns `None`.
    pub fn propose(&mut self, layout: &GridLayoutData, candidate: GridRect) -> Option<GridRect> {
        if candidate == self.placeholder {
            return None;
        }
        if !layout.can_place(&candidate, Some(&self.item_id)) {
            trace!(item = %self.item_id, %candidate, "candidate rejected");
            return None;
        }
        self.placeholder = candidate;
        Some(candidate)
    }

    /// Close the frame, turning the placeholder into a commit if it moved
    pub fn finish(self, layout: &GridLayoutData, command: &dyn Command) -> GestureOutcome {
        if self.placeholder == self.origin {
            return GestureOutcome::Discarded(DiscardReason::NoChange);
        }

        let Some(current) = layout.item(&self.item_id) else {
            debug!(item = %self.item_id, "gesture target disappeared");
            return GestureOutcome::Discarded(DiscardReason::TargetMissing);
        };
        if current.rect() == self.placeholder {
            return GestureOutcome::Discarded(DiscardReason::NoChange);
        }

        match command.apply(layout) {
            Ok(next) => {
                debug!(
                    item = %self.item_id,
                    from = %self.origin,
                    to = %self.placeholder,
                    command = command.display_name(),
                    "gesture committed"
                );
                GestureOutcome::Committed(next)
            }
            Err(e) => {
                debug!(item = %self.item_id, error = %e, "gesture commit rejected");
                GestureOutcome::Discarded(DiscardReason::Invalid)
            }
        }
    }
}

/// Why a gesture ended without changing the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// No gesture was in progress
    NotActive,
    /// The final rectangle equals the original
    NoChange,
    /// The gesture was cancelled
    Cancelled,
    /// The item no longer exists
    TargetMissing,
    /// The placeholder no longer fits the current document
    Invalid,
}

/// Result of ending a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture produced this new document
    Committed(GridLayoutData),
    /// Nothing to commit
    Discarded(DiscardReason),
}

impl GestureOutcome {
    /// The committed document, if any
    pub fn into_layout(self) -> Option<GridLayoutData> {
        match self {
            GestureOutcome::Committed(layout) => Some(layout),
            GestureOutcome::Discarded(_) => None,
        }
    }
}

/// A per-gesture controller turning pointer travel into proposals.
///
/// Implementations hold an optional `GestureFrame`: `None` is the idle
/// state. `end` and `cancel` always return the controller to idle.
pub trait Gesture: std::fmt::Debug + Send + Sync {
    /// Current frame, if a gesture is in progress
    fn frame(&self) -> Option<&GestureFrame>;

    /// Apply the pointer travel since gesture start.
    ///
    /// Returns the new placeholder if it changed.
    fn move_by(
        &mut self,
        layout: &GridLayoutData,
        metrics: &GridMetrics,
        delta: PointerDelta,
    ) -> Option<GridRect>;

    /// Finish the gesture
    fn end(&mut self, layout: &GridLayoutData) -> GestureOutcome;

    /// Abandon the gesture without committing
    fn cancel(&mut self) -> GestureOutcome;

    /// Get a display name for this gesture
    fn display_name(&self) -> &str;

    /// Item being manipulated
    fn item_id(&self) -> Option<&ItemId> {
        self.frame().map(|frame| &frame.item_id)
    }

    /// Last accepted candidate
    fn placeholder(&self) -> Option<GridRect> {
        self.frame().map(|frame| frame.placeholder)
    }

    fn is_active(&self) -> bool {
        self.frame().is_some()
    }
}
