//! Error types for layout editing

use grid_model::{GridRect, ItemId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Grid model error: {0}")]
    GridModel(#[from] grid_model::GridModelError),

    #[error("Item {id} cannot be placed at {rect}")]
    InvalidPlacement { id: ItemId, rect: GridRect },

    #[error("Cell ({x}, {y}) is not an empty cell of the grid")]
    CellUnavailable { x: i32, y: i32 },

    #[error("Canvas is read-only")]
    ReadOnly,
}

pub type Result<T> = std::result::Result<T, EngineError>;
