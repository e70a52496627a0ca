//! Placed grid items

use crate::{GridRect, ItemId, WidgetKind, WidgetType};
use serde::{Deserialize, Serialize};

/// One widget placed on the grid.
///
/// Only `id` and the geometry matter to layout; the widget payload is
/// carried along for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    /// Stable identifier for the item's lifetime
    pub id: ItemId,
    /// Column start (1-based)
    pub x: i32,
    /// Row start (1-based)
    pub y: i32,
    /// Column span
    pub w: i32,
    /// Row span
    pub h: i32,
    /// What the item shows
    #[serde(flatten)]
    pub widget: WidgetKind,
}

impl GridItem {
    /// Create a new item
    pub fn new(id: impl Into<ItemId>, rect: GridRect, widget: WidgetKind) -> Self {
        Self {
            id: id.into(),
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            widget,
        }
    }

    /// The rectangle this item occupies
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.w, self.h)
    }

    /// A copy of this item moved/resized to `rect`
    pub fn with_rect(&self, rect: GridRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            ..self.clone()
        }
    }

    /// A copy of this item with a different widget payload
    pub fn with_widget(&self, widget: WidgetKind) -> Self {
        Self {
            widget,
            ..self.clone()
        }
    }

    pub fn widget_type(&self) -> WidgetType {
        self.widget.widget_type()
    }
}
