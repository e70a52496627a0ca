//! Error types for layout document operations

use crate::{GridRect, ItemId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridModelError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("Invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("Item {id} has invalid size {w}x{h}")]
    InvalidSize { id: ItemId, w: i32, h: i32 },

    #[error("Item {id} at {rect} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        id: ItemId,
        rect: GridRect,
        rows: i32,
        cols: i32,
    },

    #[error("Items {first} and {second} overlap")]
    Overlap { first: ItemId, second: ItemId },
}

pub type Result<T> = std::result::Result<T, GridModelError>;
