//! The grid layout document
//!
//! `GridLayoutData` is treated as an immutable value: every mutation method
//! returns a new document and leaves `self` untouched, so a holder can keep
//! the previous value around and compare or discard it cheaply.

use crate::{
    has_collision, is_cell_free, GridItem, GridModelError, GridRect, ItemId, Result, WidgetKind,
    MIN_SPAN,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed-size grid and the items placed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayoutData {
    /// Number of rows
    pub rows: i32,
    /// Number of columns
    pub cols: i32,
    /// Placed items, in render order
    #[serde(default)]
    pub items: Vec<GridItem>,
}

impl GridLayoutData {
    /// Create an empty grid
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            items: Vec::new(),
        }
    }

    /// Create a grid with the given items (not validated)
    pub fn with_items(rows: i32, cols: i32, items: Vec<GridItem>) -> Self {
        Self { rows, cols, items }
    }

    /// Find an item by id
    pub fn item(&self, id: &ItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Check whether an item with this id exists
    pub fn contains(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// The item covering cell `(x, y)`, if any
    pub fn item_at(&self, x: i32, y: i32) -> Option<&GridItem> {
        self.items.iter().find(|item| item.rect().contains_cell(x, y))
    }

    /// Check whether no item covers cell `(x, y)`
    pub fn is_cell_free(&self, x: i32, y: i32) -> bool {
        is_cell_free(x, y, &self.items)
    }

    /// Check whether `(x, y)` is a cell of this grid
    pub fn in_grid(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && x <= self.cols && y <= self.rows
    }

    /// Check whether `rect` could be placed for item `exclude` without leaving
    /// the grid or overlapping another item
    pub fn can_place(&self, rect: &GridRect, exclude: Option<&ItemId>) -> bool {
        rect.fits_within(self.rows, self.cols) && !has_collision(rect, exclude, &self.items)
    }

    /// A new document with item `id` moved/resized to `rect`.
    ///
    /// Returns `None` when the item does not exist. The caller is
    /// responsible for having validated `rect`.
    pub fn with_item_rect(&self, id: &ItemId, rect: GridRect) -> Option<Self> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        let mut items = self.items.clone();
        items[index] = items[index].with_rect(rect);
        Some(Self {
            items,
            ..self.clone()
        })
    }

    /// A new document with `item` appended.
    ///
    /// Fails if the id is taken, or the item leaves the grid or overlaps
    /// another item.
    pub fn with_item_added(&self, item: GridItem) -> Result<Self> {
        if self.contains(&item.id) {
            return Err(GridModelError::DuplicateItem(item.id));
        }
        self.check_item(&item)?;
        if let Some(other) = self
            .items
            .iter()
            .find(|other| other.rect().overlaps(&item.rect()))
        {
            return Err(GridModelError::Overlap {
                first: other.id.clone(),
                second: item.id,
            });
        }

        let mut items = self.items.clone();
        items.push(item);
        Ok(Self {
            items,
            ..self.clone()
        })
    }

    /// A new document without item `id`
    pub fn with_item_removed(&self, id: &ItemId) -> Result<Self> {
        if !self.contains(id) {
            return Err(GridModelError::ItemNotFound(id.clone()));
        }
        Ok(Self {
            items: self.items.iter().filter(|item| &item.id != id).cloned().collect(),
            ..self.clone()
        })
    }

    /// A new document with item `id` showing `widget`; geometry is untouched
    pub fn with_item_widget(&self, id: &ItemId, widget: WidgetKind) -> Result<Self> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| GridModelError::ItemNotFound(id.clone()))?;
        let mut items = self.items.clone();
        items[index] = items[index].with_widget(widget);
        Ok(Self {
            items,
            ..self.clone()
        })
    }

    /// Check every document invariant, reporting the first violation:
    /// positive dimensions, unique ids, items within bounds with a span of at
    /// least 1x1, and no two items overlapping.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(GridModelError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(&item.id) {
                return Err(GridModelError::DuplicateItem(item.id.clone()));
            }
            self.check_item(item)?;
        }

        for (i, first) in self.items.iter().enumerate() {
            for second in &self.items[i + 1..] {
                if first.rect().overlaps(&second.rect()) {
                    return Err(GridModelError::Overlap {
                        first: first.id.clone(),
                        second: second.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_item(&self, item: &GridItem) -> Result<()> {
        if item.w < MIN_SPAN || item.h < MIN_SPAN {
            return Err(GridModelError::InvalidSize {
                id: item.id.clone(),
                w: item.w,
                h: item.h,
            });
        }
        if !item.rect().fits_within(self.rows, self.cols) {
            return Err(GridModelError::OutOfBounds {
                id: item.id.clone(),
                rect: item.rect(),
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
