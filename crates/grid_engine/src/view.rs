//! Render model for a canvas
//!
//! A `CanvasView` is a flat, host-agnostic description of what to draw for
//! the current canvas state: background cells, items with their pixel
//! bounds, and the gesture placeholder. It is recomputed from scratch on
//! every call.

use crate::{Canvas, Corner, GridMetrics};
use grid_model::{GridRect, ItemId, WidgetType};
use serde::{Deserialize, Serialize};

/// Stacking layer of a rendered item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Base,
    Selected,
    Active,
}

impl Layer {
    /// CSS-style z-index of the layer
    pub fn z_index(&self) -> u32 {
        match self {
            Layer::Base => 0,
            Layer::Selected => 50,
            Layer::Active => 100,
        }
    }
}

/// A rectangle in pixels, relative to the grid's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Pixel bounds of a grid rectangle
    pub fn of(rect: GridRect, metrics: &GridMetrics) -> Self {
        Self {
            left: metrics.offset_px(rect.x),
            top: metrics.offset_px(rect.y),
            width: metrics.span_px(rect.w),
            height: metrics.span_px(rect.h),
        }
    }
}

/// One background cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub occupied: bool,
    /// Clicking it asks the host to add an item here
    pub clickable: bool,
}

/// One item as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub widget_type: WidgetType,
    pub rect: GridRect,
    pub bounds: PixelRect,
    /// The item is being dragged or resized; the placeholder stands in for it
    pub hidden: bool,
    pub selected: bool,
    pub draggable: bool,
    pub handles: Vec<Corner>,
    pub layer: Layer,
}

/// Placeholder outline of the running gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderView {
    pub item_id: ItemId,
    pub rect: GridRect,
    pub bounds: PixelRect,
}

/// Everything needed to draw the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasView {
    pub metrics: GridMetrics,
    pub width: f64,
    /// Minimum height of the grid container
    pub height: f64,
    pub read_only: bool,
    pub cells: Vec<CellView>,
    pub items: Vec<ItemView>,
    pub placeholder: Option<PlaceholderView>,
}

impl CanvasView {
    pub fn item(&self, id: &ItemId) -> Option<&ItemView> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&CellView> {
        self.cells.iter().find(|cell| cell.x == x && cell.y == y)
    }
}

impl Canvas {
    /// Build the render model for the current state
    pub fn view(&self) -> CanvasView {
        let layout = self.layout();
        let metrics = *self.metrics();
        let editable = !self.is_read_only();
        let active = self.active_item();

        let cells = (1..=layout.rows)
            .flat_map(|y| (1..=layout.cols).map(move |x| (x, y)))
            .map(|(x, y)| {
                let occupied = !layout.is_cell_free(x, y);
                CellView {
                    x,
                    y,
                    occupied,
                    clickable: editable && !occupied,
                }
            })
            .collect();

        let items = layout
            .items
            .iter()
            .map(|item| {
                let rect = item.rect();
                let is_active = active == Some(&item.id);
                let selected = self.selected() == Some(&item.id);
                let layer = if is_active {
                    Layer::Active
                } else if selected {
                    Layer::Selected
                } else {
                    Layer::Base
                };
                ItemView {
                    id: item.id.clone(),
                    widget_type: item.widget_type(),
                    rect,
                    bounds: PixelRect::of(rect, &metrics),
                    hidden: is_active,
                    selected,
                    draggable: editable,
                    handles: if editable { Corner::ALL.to_vec() } else { Vec::new() },
                    layer,
                }
            })
            .collect();

        let placeholder = match (active, self.placeholder()) {
            (Some(item_id), Some(rect)) => Some(PlaceholderView {
                item_id: item_id.clone(),
                rect,
                bounds: PixelRect::of(rect, &metrics),
            }),
            _ => None,
        };

        CanvasView {
            metrics,
            width: metrics.span_px(layout.cols),
            height: metrics.span_px(layout.rows),
            read_only: !editable,
            cells,
            items,
            placeholder,
        }
    }
}
