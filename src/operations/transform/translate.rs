use geo::MultiPolygon;

use crate::geometry::Ring;
use crate::math::polygon_2d::{transform_polygon, transform_region};
use crate::math::{Isometry2, Vector2};

/// Moves geometry by a fixed offset.
pub struct Translate {
    offset: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(offset: Vector2) -> Self {
        Self { offset }
    }

    /// Translates a region.
    #[must_use]
    pub fn region(&self, region: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        transform_region(region, &self.isometry())
    }

    /// Translates all three parts of a ring.
    #[must_use]
    pub fn ring(&self, ring: &Ring) -> Ring {
        let iso = self.isometry();
        Ring {
            outer: transform_polygon(&ring.outer, &iso),
            inner: transform_polygon(&ring.inner, &iso),
            area: transform_region(&ring.area, &iso),
        }
    }

    fn isometry(&self) -> Isometry2 {
        Isometry2::translation(self.offset.x, self.offset.y)
    }
}
