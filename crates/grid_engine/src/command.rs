//! Command system for layout editing
//!
//! Every change to a layout document goes through a `Command`, which reads
//! the current document and produces a new one. Gestures use `MoveItem` and
//! `ResizeItem` to commit; the host uses the item commands for explicit
//! edits from its panels.

use crate::{EngineError, Result};
use grid_model::{
    GridItem, GridLayoutData, GridRect, ItemId, WidgetKind, WidgetType, MIN_SPAN,
};
use serde::{Deserialize, Serialize};

/// Trait for all layout commands
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply this command, producing a new document
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData>;

    /// Get a display name for this command
    fn display_name(&self) -> &str;

    /// Clone this command into a box
    fn clone_box(&self) -> Box<dyn Command>;
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Replace an item's rectangle after checking it fits and collides with nothing
fn place(layout: &GridLayoutData, id: &ItemId, rect: GridRect) -> Result<GridLayoutData> {
    if !layout.contains(id) {
        return Err(grid_model::GridModelError::ItemNotFound(id.clone()).into());
    }
    if !layout.can_place(&rect, Some(id)) {
        return Err(EngineError::InvalidPlacement {
            id: id.clone(),
            rect,
        });
    }
    layout
        .with_item_rect(id, rect)
        .ok_or_else(|| grid_model::GridModelError::ItemNotFound(id.clone()).into())
}

/// Move an item to a new top-left cell, keeping its size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveItem {
    pub id: ItemId,
    pub x: i32,
    pub y: i32,
}

impl MoveItem {
    pub fn new(id: ItemId, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }
}

impl Command for MoveItem {
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData> {
        let item = layout
            .item(&self.id)
            .ok_or_else(|| grid_model::GridModelError::ItemNotFound(self.id.clone()))?;
        let rect = GridRect::new(self.x, self.y, item.w, item.h);
        place(layout, &self.id, rect)
    }

    fn display_name(&self) -> &str {
        "Move Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace an item's position and size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeItem {
    pub id: ItemId,
    pub rect: GridRect,
}

impl ResizeItem {
    pub fn new(id: ItemId, rect: GridRect) -> Self {
        Self { id, rect }
    }
}

impl Command for ResizeItem {
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData> {
        place(layout, &self.id, self.rect)
    }

    fn display_name(&self) -> &str {
        "Resize Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Add a new 1x1 widget at an empty cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub id: ItemId,
    pub x: i32,
    pub y: i32,
    pub widget: WidgetKind,
}

impl AddItem {
    /// Add a widget of `widget_type` with its default content and a fresh id
    pub fn new(x: i32, y: i32, widget_type: WidgetType) -> Self {
        Self {
            id: ItemId::new(),
            x,
            y,
            widget: WidgetKind::placeholder(widget_type),
        }
    }

    /// Set the widget payload
    pub fn with_widget(mut self, widget: WidgetKind) -> Self {
        self.widget = widget;
        self
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }
}

impl Command for AddItem {
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData> {
        if !layout.in_grid(self.x, self.y) || !layout.is_cell_free(self.x, self.y) {
            return Err(EngineError::CellUnavailable {
                x: self.x,
                y: self.y,
            });
        }

        let item = GridItem::new(
            self.id.clone(),
            GridRect::new(self.x, self.y, MIN_SPAN, MIN_SPAN),
            self.widget.clone(),
        );
        Ok(layout.with_item_added(item)?)
    }

    fn display_name(&self) -> &str {
        "Add Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Replace an item's widget payload (type and content)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWidget {
    pub id: ItemId,
    pub widget: WidgetKind,
}

impl UpdateWidget {
    pub fn new(id: ItemId, widget: WidgetKind) -> Self {
        Self { id, widget }
    }
}

impl Command for UpdateWidget {
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData> {
        Ok(layout.with_item_widget(&self.id, self.widget.clone())?)
    }

    fn display_name(&self) -> &str {
        "Update Widget"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Delete an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub id: ItemId,
}

impl RemoveItem {
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }
}

impl Command for RemoveItem {
    fn apply(&self, layout: &GridLayoutData) -> Result<GridLayoutData> {
        Ok(layout.with_item_removed(&self.id)?)
    }

    fn display_name(&self) -> &str {
        "Remove Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayoutData {
        GridLayoutData::with_items(
            4,
            4,
            vec![
                GridItem::new("a", GridRect::new(1, 1, 2, 2), WidgetKind::text("a")),
                GridItem::new("b", GridRect::new(3, 1, 2, 2), WidgetKind::text("b")),
            ],
        )
    }

    #[test]
    fn test_move_item() {
        let result = MoveItem::new("a".into(), 1, 3).apply(&layout()).unwrap();
        assert_eq!(result.item(&"a".into()).unwrap().rect(), GridRect::new(1, 3, 2, 2));
    }

    #[test]
    fn test_move_item_onto_neighbour_fails() {
        let err = MoveItem::new("a".into(), 3, 1).apply(&layout()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPlacement { .. }));
    }

    #[test]
    fn test_resize_item_out_of_bounds_fails() {
        let err = ResizeItem::new("a".into(), GridRect::new(1, 3, 2, 3))
            .apply(&layout())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPlacement { .. }));
    }

    #[test]
    fn test_unknown_item() {
        let err = MoveItem::new("zzz".into(), 1, 1).apply(&layout()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::GridModel(grid_model::GridModelError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_add_item_defaults() {
        let command = AddItem::new(2, 4, WidgetType::Text).with_id("new");
        let result = command.apply(&layout()).unwrap();
        let item = result.item(&"new".into()).unwrap();

        assert_eq!(item.rect(), GridRect::new(2, 4, 1, 1));
        assert_eq!(item.widget, WidgetKind::text("New Text Widget"));
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_add_item_on_occupied_or_outside_cell_fails() {
        let err = AddItem::new(2, 2, WidgetType::App).apply(&layout()).unwrap_err();
        assert!(matches!(err, EngineError::CellUnavailable { x: 2, y: 2 }));

        let err = AddItem::new(5, 1, WidgetType::App).apply(&layout()).unwrap_err();
        assert!(matches!(err, EngineError::CellUnavailable { x: 5, y: 1 }));
    }

    #[test]
    fn test_update_and_remove() {
        let updated = UpdateWidget::new("b".into(), WidgetKind::image("https://example.com/a.png"))
            .apply(&layout())
            .unwrap();
        assert_eq!(
            updated.item(&"b".into()).unwrap().widget_type(),
            WidgetType::Image
        );

        let removed = RemoveItem::new("b".into()).apply(&updated).unwrap();
        assert_eq!(removed.items.len(), 1);
        assert!(RemoveItem::new("b".into()).apply(&removed).is_err());
    }

    #[test]
    fn test_boxed_commands_clone() {
        let command: Box<dyn Command> = Box::new(MoveItem::new("a".into(), 1, 3));
        let copy = command.clone();
        assert_eq!(copy.display_name(), "Move Item");
        assert_eq!(copy.apply(&layout()).unwrap(), command.apply(&layout()).unwrap());
    }
}
