use crate::geometry::{ShapeKind, ShapeParams};
use crate::math::{Point2, Vector2};

/// Fraction of the outer extent used as grid pitch, so neighbors overlap.
pub const CELL_SCALE: f64 = 0.9;

/// Implicit grid of placement slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGrid {
    pub count: usize,
    pub cols: usize,
    pub rows: usize,
    pub cell: Vector2,
    pub origin: Point2,
}

impl SlotGrid {
    /// Lays out `ceil(sqrt(count))` columns and as many rows as needed,
    /// starting `margin` away from the origin.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(count: usize, shape: &ShapeParams, margin: f64) -> Self {
        let cols = ((count as f64).sqrt().ceil() as usize).max(1);
        let rows = count.div_ceil(cols);
        Self {
            count,
            cols,
            rows,
            cell: outer_size(shape) * CELL_SCALE,
            origin: Point2::new(margin, margin),
        }
    }

    /// Largest jitter offset on each axis: half a cell.
    #[must_use]
    pub fn jitter_bound(&self) -> Vector2 {
        self.cell * 0.5
    }

    /// Ideal center of the cell at `(row, col)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ideal_center(&self, row: usize, col: usize) -> Point2 {
        Point2::new(
            self.origin.x + col as f64 * self.cell.x + self.cell.x / 2.0,
            self.origin.y + row as f64 * self.cell.y + self.cell.y / 2.0,
        )
    }

    /// Ideal centers of the first `count` cells in row-major order.
    pub fn ideal_centers(&self) -> impl Iterator<Item = Point2> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| self.ideal_center(r, c)))
            .take(self.count)
    }
}

/// Width and height of the outer outline at rotation 0. Polygons use their
/// width on both axes.
fn outer_size(shape: &ShapeParams) -> Vector2 {
    match shape.kind {
        ShapeKind::Rectangle => Vector2::new(shape.outer.width, shape.outer.height),
        ShapeKind::Polygon { .. } => Vector2::new(shape.outer.width, shape.outer.width),
    }
}
