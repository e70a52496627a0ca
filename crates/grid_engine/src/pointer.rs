//! Pointer coordinates and pixel-to-cell conversion
//!
//! The grid is laid out with square cells separated by a fixed gap. One grid
//! step along either axis is therefore `cell_size + gap` pixels, and a
//! pointer delta maps to a cell delta by dividing by that step and rounding.

use grid_model::GridConfig;
use serde::{Deserialize, Serialize};

/// Cell size used before the container width is known
pub const INITIAL_CELL_SIZE_PX: f64 = 50.0;

/// Largest cell delta a single pointer delta converts to, along either axis.
/// Keeps grid coordinate arithmetic far from `i32` overflow.
pub const MAX_CELL_DELTA: i32 = i32::MAX / 4;

/// A pointer position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> PointerDelta {
        PointerDelta::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Pointer travel in pixels since the gesture started
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PointerDelta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the delta
    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// A delta in whole grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellDelta {
    pub dx: i32,
    pub dy: i32,
}

impl CellDelta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Pixel metrics of a rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Width and height of one cell in pixels
    pub cell_size: f64,
    /// Gap between cells in pixels
    pub gap: f64,
    /// Whether the cell size hit the minimum and the grid overflows its
    /// container
    pub overflow: bool,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            cell_size: INITIAL_CELL_SIZE_PX,
            gap: grid_model::GAP_PX,
            overflow: false,
        }
    }
}

impl GridMetrics {
    /// Create metrics with a fixed cell size
    pub fn new(cell_size: f64, gap: f64) -> Self {
        Self {
            cell_size,
            gap,
            overflow: false,
        }
    }

    /// Size square cells so `cols` columns and `cols - 1` gaps fill
    /// `container_width`, never going below the configured minimum cell width
    pub fn fit(container_width: f64, cols: i32, config: &GridConfig) -> Self {
        let cols = cols.max(1) as f64;
        let cell_size = (container_width - (cols - 1.0) * config.gap) / cols;

        if cell_size < config.min_cell_width || !cell_size.is_finite() {
            Self {
                cell_size: config.min_cell_width,
                gap: config.gap,
                overflow: true,
            }
        } else {
            Self {
                cell_size,
                gap: config.gap,
                overflow: false,
            }
        }
    }

    /// Pixels covered by one grid step
    pub fn step(&self) -> f64 {
        self.cell_size + self.gap
    }

    /// Convert a pixel distance into whole cells.
    ///
    /// Rounds half away from zero, so a move registers once it covers half
    /// a step. The result is bounded by `MAX_CELL_DELTA`.
    pub fn cells(&self, px: f64) -> i32 {
        let step = self.step();
        if step <= 0.0 || !px.is_finite() {
            return 0;
        }
        let limit = MAX_CELL_DELTA as f64;
        (px / step).round().clamp(-limit, limit) as i32
    }

    /// Convert a pointer delta into a cell delta, each axis independently
    pub fn cell_delta(&self, delta: PointerDelta) -> CellDelta {
        CellDelta::new(self.cells(delta.dx), self.cells(delta.dy))
    }

    /// Pixel length of `span` cells including the gaps between them
    pub fn span_px(&self, span: i32) -> f64 {
        if span <= 0 {
            return 0.0;
        }
        span as f64 * self.cell_size + (span - 1) as f64 * self.gap
    }

    /// Pixel offset of the leading edge of 1-based cell `index`
    pub fn offset_px(&self, index: i32) -> f64 {
        (index - 1) as f64 * self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_fills_container() {
        let metrics = GridMetrics::fit(800.0, 8, &GridConfig::default());
        // 800 - 7 * 16 = 688, / 8 = 86
        assert_eq!(metrics.cell_size, 86.0);
        assert!(!metrics.overflow);
        assert_eq!(metrics.span_px(8), 800.0);
    }

    #[test]
    fn test_fit_below_minimum_overflows() {
        let metrics = GridMetrics::fit(320.0, 12, &GridConfig::default());
        assert_eq!(metrics.cell_size, 40.0);
        assert!(metrics.overflow);
        assert_eq!(metrics.span_px(12), 12.0 * 40.0 + 11.0 * 16.0);
    }

    #[test]
    fn test_cells_round_half_away_from_zero() {
        let metrics = GridMetrics::new(84.0, 16.0);
        assert_eq!(metrics.cells(0.0), 0);
        assert_eq!(metrics.cells(49.9), 0);
        assert_eq!(metrics.cells(50.0), 1);
        assert_eq!(metrics.cells(-50.0), -1);
        assert_eq!(metrics.cells(-49.0), 0);
        assert_eq!(metrics.cells(249.0), 2);
        assert_eq!(metrics.cells(250.0), 3);
    }

    #[test]
    fn test_cells_are_bounded() {
        let metrics = GridMetrics::new(84.0, 16.0);
        assert_eq!(metrics.cells(1e12), MAX_CELL_DELTA);
        assert_eq!(metrics.cells(-1e12), -MAX_CELL_DELTA);
        assert_eq!(metrics.cells(f64::MAX), MAX_CELL_DELTA);
    }

    #[test]
    fn test_cells_degenerate_step() {
        let metrics = GridMetrics::new(0.0, 0.0);
        assert_eq!(metrics.cells(100.0), 0);
        assert_eq!(GridMetrics::default().cells(f64::NAN), 0);
    }

    #[test]
    fn test_offsets() {
        let metrics = GridMetrics::new(50.0, 10.0);
        assert_eq!(metrics.offset_px(1), 0.0);
        assert_eq!(metrics.offset_px(3), 120.0);
        assert_eq!(metrics.span_px(0), 0.0);
        assert_eq!(metrics.span_px(2), 110.0);
    }

    #[test]
    fn test_delta_distance() {
        let delta = Point::new(13.0, 14.0).delta_from(Point::new(10.0, 10.0));
        assert_eq!(delta, PointerDelta::new(3.0, 4.0));
        assert_eq!(delta.distance(), 5.0);
    }
}
