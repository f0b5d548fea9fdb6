use geo::{BooleanOps, MultiPolygon};

use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::polygon_2d::region_bounds;
use crate::math::{Point2, Vector2};

/// Canvas rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetBounds {
    pub min: Point2,
    pub max: Point2,
}

impl SheetBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Offset that moves layout coordinates onto a canvas whose top-left
    /// corner is the origin.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        -self.min.coords
    }
}

/// The overlapping layout as placed: canvas bounds plus, per ring, the
/// part of it covered by any other ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pub bounds: SheetBounds,
    pub combined_overlaps: Vec<MultiPolygon<f64>>,
}

/// Prepares the overlapping ("as assembled") view of a layout.
pub struct CompositeView<'a> {
    rings: &'a [Ring],
    margin: f64,
}

impl<'a> CompositeView<'a> {
    /// Creates a new `CompositeView` query.
    #[must_use]
    pub fn new(rings: &'a [Ring], margin: f64) -> Self {
        Self { rings, margin }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are no rings or none
    /// of them has any coordinates.
    pub fn execute(&self) -> Result<Composite> {
        let bounds = self.bounds()?;
        let combined_overlaps = (0..self.rings.len())
            .map(|i| self.combined_overlap(i))
            .collect();
        Ok(Composite {
            bounds,
            combined_overlaps,
        })
    }

    fn bounds(&self) -> Result<SheetBounds> {
        let (lo, hi) = self
            .rings
            .iter()
            .filter_map(|ring| region_bounds(&ring.area))
            .reduce(|(alo, ahi), (blo, bhi)| {
                (
                    Point2::new(alo.x.min(blo.x), alo.y.min(blo.y)),
                    Point2::new(ahi.x.max(bhi.x), ahi.y.max(bhi.y)),
                )
            })
            .ok_or_else(|| OperationError::InvalidInput("composite view needs at least one ring".into()))?;

        let pad = Vector2::new(self.margin, self.margin);
        Ok(SheetBounds {
            min: lo - pad,
            max: hi + pad,
        })
    }

    /// `ring(i) ∩ ⋃ ring(j), j ≠ i`. Empty when there is no other ring.
    fn combined_overlap(&self, i: usize) -> MultiPolygon<f64> {
        let others = self
            .rings
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, ring)| ring.area.clone())
            .reduce(|acc, area| acc.union(&area));

        match others {
            Some(union) => self.rings[i].area.intersection(&union),
            None => MultiPolygon::new(vec![]),
        }
    }
}
