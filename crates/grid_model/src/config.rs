//! Grid configuration constants
//!
//! Defaults for new documents and the pixel metrics used to map pointer
//! movement onto grid cells.

use serde::{Deserialize, Serialize};

/// Default number of rows for a new grid
pub const DEFAULT_ROWS: i32 = 12;

/// Default number of columns for a new grid
pub const DEFAULT_COLS: i32 = 12;

/// Gap between cells in pixels
pub const GAP_PX: f64 = 16.0;

/// Smallest cell width in pixels before the grid overflows instead of
/// shrinking
pub const MIN_CELL_WIDTH_PX: f64 = 40.0;

/// Pointer travel in pixels before a press on an item becomes a drag
pub const ACTIVATION_DISTANCE_PX: f64 = 8.0;

/// Tunable grid metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows for a freshly created grid
    pub default_rows: i32,
    /// Columns for a freshly created grid
    pub default_cols: i32,
    /// Gap between cells in pixels
    pub gap: f64,
    /// Minimum cell width in pixels
    pub min_cell_width: f64,
    /// Drag activation distance in pixels
    pub activation_distance: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
            gap: GAP_PX,
            min_cell_width: MIN_CELL_WIDTH_PX,
            activation_distance: ACTIVATION_DISTANCE_PX,
        }
    }
}

impl GridConfig {
    /// Check the values are usable; returns a description of the first
    /// problem found
    pub fn check(&self) -> Option<String> {
        if self.default_rows < 1 || self.default_cols < 1 {
            return Some(format!(
                "default grid must be at least 1x1, got {}x{}",
                self.default_rows, self.default_cols
            ));
        }
        if !(self.gap >= 0.0) {
            return Some(format!("gap must be non-negative, got {}", self.gap));
        }
        if !(self.min_cell_width > 0.0) {
            return Some(format!(
                "minimum cell width must be positive, got {}",
                self.min_cell_width
            ));
        }
        if !(self.activation_distance >= 0.0) {
            return Some(format!(
                "activation distance must be non-negative, got {}",
                self.activation_distance
            ));
        }
        None
    }
}
