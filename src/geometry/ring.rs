use geo::{BooleanOps, MultiPolygon, Polygon};

use crate::math::polygon_2d::{effective_area, polygon_from_points, ring_vertices};
use crate::math::Point2;

/// A placed piece's geometry: the outer outline, the hole, and the area
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Outer outline.
    pub outer: Polygon<f64>,
    /// Removed interior ("hole").
    pub inner: Polygon<f64>,
    /// `outer` minus `inner`.
    pub area: MultiPolygon<f64>,
}

impl Ring {
    /// Builds a ring from its outer and inner outlines.
    #[must_use]
    pub fn from_outlines(outer: Polygon<f64>, inner: Polygon<f64>) -> Self {
        let area = outer.difference(&inner);
        Self { outer, inner, area }
    }

    /// Rebuilds a ring from outer and inner vertex loops.
    #[must_use]
    pub fn from_vertices(outer: &[Point2], inner: &[Point2]) -> Self {
        Self::from_outlines(polygon_from_points(outer), polygon_from_points(inner))
    }

    /// Outer boundary vertices, without the closing duplicate.
    #[must_use]
    pub fn outer_vertices(&self) -> Vec<Point2> {
        ring_vertices(self.outer.exterior())
    }

    /// Hole boundary vertices, without the closing duplicate.
    #[must_use]
    pub fn inner_vertices(&self) -> Vec<Point2> {
        ring_vertices(self.inner.exterior())
    }

    /// Area of the ring material; zero for degenerate rings.
    #[must_use]
    pub fn area_size(&self) -> f64 {
        effective_area(&self.area)
    }

    /// Intersection of the two rings' material.
    #[must_use]
    pub fn intersection(&self, other: &Ring) -> MultiPolygon<f64> {
        self.area.intersection(&other.area)
    }
}
