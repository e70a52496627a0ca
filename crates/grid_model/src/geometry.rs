//! Grid geometry - rectangles, overlap tests, and boundary clamping
//!
//! All coordinates are 1-based integer grid cells. A rectangle at `(x, y)`
//! with span `(w, h)` covers columns `x..x + w` and rows `y..y + h`
//! (half-open), so two rectangles sharing an edge do not overlap.

use crate::{GridItem, ItemId};
use serde::{Deserialize, Serialize};

/// Smallest span an item may have along either axis
pub const MIN_SPAN: i32 = 1;

/// An axis-aligned rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    /// Column of the top-left cell (1-based)
    pub x: i32,
    /// Row of the top-left cell (1-based)
    pub y: i32,
    /// Column span
    pub w: i32,
    /// Row span
    pub h: i32,
}

impl GridRect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Last column covered by the rectangle
    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Last row covered by the rectangle
    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Check whether this rectangle overlaps another.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Check whether the cell `(x, y)` lies inside the rectangle
    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Check whether the rectangle lies entirely within a `rows` x `cols` grid
    /// and has at least a 1x1 span
    pub fn fits_within(&self, rows: i32, cols: i32) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.w >= MIN_SPAN
            && self.h >= MIN_SPAN
            && self.right() <= cols
            && self.bottom() <= rows
    }

    /// Same rectangle moved by whole cells
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w,
            self.h,
        )
    }

    /// Clamp a translated rectangle into the grid without changing its size.
    ///
    /// Used for drag proposals: `x' = max(1, min(x, cols - w + 1))`, same for y.
    pub fn clamp_translation(&self, rows: i32, cols: i32) -> Self {
        Self::new(
            self.x.min(cols - self.w + 1).max(1),
            self.y.min(rows - self.h + 1).max(1),
            self.w,
            self.h,
        )
    }

    /// Clamp a resized rectangle into the grid by shrinking it.
    ///
    /// An edge past column/row 1 is pulled back to 1 and the span shrinks by
    /// the excess, so the opposite edge stays put. An edge past the far
    /// boundary shrinks the span. Spans never go below 1.
    pub fn clamp_extent(&self, rows: i32, cols: i32) -> Self {
        let (x, w) = clamp_axis(self.x, self.w, cols);
        let (y, h) = clamp_axis(self.y, self.h, rows);
        Self::new(x, y, w, h)
    }
}

fn clamp_axis(mut start: i32, mut span: i32, limit: i32) -> (i32, i32) {
    if start < 1 {
        span = span.saturating_sub(1i32.saturating_sub(start));
        start = 1;
    }
    if start.saturating_add(span).saturating_sub(1) > limit {
        span = limit - start + 1;
    }
    (start, span.max(MIN_SPAN))
}

impl std::fmt::Display for GridRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
    }
}

/// Check whether `candidate` overlaps any item other than `exclude`
pub fn has_collision(candidate: &GridRect, exclude: Option<&ItemId>, items: &[GridItem]) -> bool {
    items
        .iter()
        .filter(|item| Some(&item.id) != exclude)
        .any(|item| candidate.overlaps(&item.rect()))
}

/// Check whether no item occupies the cell `(x, y)`
pub fn is_cell_free(x: i32, y: i32, items: &[GridItem]) -> bool {
    !items.iter().any(|item| item.rect().contains_cell(x, y))
}
