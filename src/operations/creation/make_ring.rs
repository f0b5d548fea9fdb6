use std::f64::consts::TAU;

use geo::{BooleanOps, MultiPolygon, Polygon};

use crate::error::{GeometryError, Result};
use crate::geometry::{Placement, Ring, ShapeKind, ShapeParams};
use crate::math::polygon_2d::{polygon_from_points, transform_polygon, transform_region};
use crate::math::{Isometry2, Point2, Vector2};

/// Builds the ring geometry of one piece at a placement.
pub struct MakeRing {
    placement: Placement,
    shape: ShapeParams,
}

impl MakeRing {
    /// Creates a new `MakeRing` operation.
    #[must_use]
    pub fn new(placement: &Placement, shape: &ShapeParams) -> Self {
        Self {
            placement: *placement,
            shape: *shape,
        }
    }

    /// Executes the operation, returning outer outline, hole, and ring area.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if the shape parameters are malformed or the
    /// placement is not finite.
    pub fn execute(&self) -> Result<Ring> {
        self.validate()?;
        Ok(match self.shape.kind {
            ShapeKind::Polygon { sides } => self.polygon_ring(sides),
            ShapeKind::Rectangle => self.rectangle_ring(),
        })
    }

    /// Builds only the hole of the piece.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if the shape parameters are malformed.
    pub fn inner_polygon(&self) -> Result<Polygon<f64>> {
        self.validate()?;
        Ok(match self.shape.kind {
            ShapeKind::Polygon { sides } => {
                let iso = self.polygon_transform(sides);
                transform_polygon(&regular_polygon(sides, self.shape.inner.radius()), &iso)
            }
            ShapeKind::Rectangle => {
                let iso = self.rectangle_transform();
                transform_polygon(&self.rectangle_inner(), &iso)
            }
        })
    }

    fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        let p = &self.placement;
        if !(p.center.x.is_finite() && p.center.y.is_finite() && p.rotation.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "placement ({}, {}) @ {} is not finite",
                p.center.x, p.center.y, p.rotation
            ))
            .into());
        }
        Ok(())
    }

    fn polygon_ring(&self, sides: usize) -> Ring {
        let outer = regular_polygon(sides, self.shape.outer.radius());
        let inner = regular_polygon(sides, self.shape.inner.radius());
        let area = outer.difference(&inner);

        let iso = self.polygon_transform(sides);
        Ring {
            outer: transform_polygon(&outer, &iso),
            inner: transform_polygon(&inner, &iso),
            area: transform_region(&area, &iso),
        }
    }

    fn rectangle_ring(&self) -> Ring {
        let outer = corner_rectangle(self.shape.outer.width, self.shape.outer.height);
        let inner = self.rectangle_inner();
        let area: MultiPolygon<f64> = outer.difference(&inner);

        let iso = self.rectangle_transform();
        Ring {
            outer: transform_polygon(&outer, &iso),
            inner: transform_polygon(&inner, &iso),
            area: transform_region(&area, &iso),
        }
    }

    /// Inner rectangle in the outer rectangle's corner-at-origin frame.
    fn rectangle_inner(&self) -> Polygon<f64> {
        let dx = (self.shape.outer.width - self.shape.inner.width) / 2.0;
        let dy = (self.shape.outer.height - self.shape.inner.height) / 2.0;
        let iso = Isometry2::translation(dx, dy);
        transform_polygon(
            &corner_rectangle(self.shape.inner.width, self.shape.inner.height),
            &iso,
        )
    }

    /// Rotation by `rotation + 180/sides` degrees about the origin, then
    /// translation to the center.
    #[allow(clippy::cast_precision_loss)]
    fn polygon_transform(&self, sides: usize) -> Isometry2 {
        let degrees = self.placement.rotation + 180.0 / sides as f64;
        Isometry2::new(self.placement.center.coords, degrees.to_radians())
    }

    /// Recenter on the origin, rotate by `rotation` degrees, translate to the center.
    fn rectangle_transform(&self) -> Isometry2 {
        let recenter = Isometry2::translation(
            -self.shape.outer.width / 2.0,
            -self.shape.outer.height / 2.0,
        );
        let place = Isometry2::new(
            self.placement.center.coords,
            self.placement.rotation.to_radians(),
        );
        place * recenter
    }
}

/// Vertices of a regular polygon centered at the origin with the first
/// vertex at `(radius, 0)`.
#[allow(clippy::cast_precision_loss)]
fn regular_polygon(sides: usize, radius: f64) -> Polygon<f64> {
    let points: Vec<Point2> = (0..sides)
        .map(|i| {
            let theta = TAU * i as f64 / sides as f64;
            Point2::from(Vector2::new(theta.cos(), theta.sin()) * radius)
        })
        .collect();
    polygon_from_points(&points)
}

/// Axis-aligned rectangle with one corner at the origin.
fn corner_rectangle(width: f64, height: f64) -> Polygon<f64> {
    polygon_from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(width, 0.0),
        Point2::new(width, height),
        Point2::new(0.0, height),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use geo::Area;

    use super::*;
    use crate::geometry::Extent;
    use crate::math::polygon_2d::{polygon_contains, region_bounds};

    fn square_coaster() -> ShapeParams {
        ShapeParams::rectangle(Extent::square(240.0), Extent::square(192.0)).unwrap()
    }

    #[test]
    fn rectangle_ring_area_and_bounds() {
        let ring = MakeRing::new(&Placement::new(100.0, 50.0, 0.0), &square_coaster())
            .execute()
            .unwrap();
        assert_relative_eq!(ring.area_size(), 240.0 * 240.0 - 192.0 * 192.0, epsilon = 1e-6);

        let (lo, hi) = region_bounds(&ring.area).unwrap();
        assert_relative_eq!(lo.x, -20.0, epsilon = 1e-9);
        assert_relative_eq!(lo.y, -70.0, epsilon = 1e-9);
        assert_relative_eq!(hi.x, 220.0, epsilon = 1e-9);
        assert_relative_eq!(hi.y, 170.0, epsilon = 1e-9);
    }

    #[test]
    fn rectangle_center_is_in_hole() {
        let ring = MakeRing::new(&Placement::new(10.0, 10.0, 30.0), &square_coaster())
            .execute()
            .unwrap();
        let center = Point2::new(10.0, 10.0);
        assert!(polygon_contains(&ring.inner, &center));
        assert!(!crate::math::polygon_2d::region_contains(&ring.area, &center));
    }

    #[test]
    fn rectangle_rotation_45_spreads_bounds() {
        let ring = MakeRing::new(&Placement::new(0.0, 0.0, 45.0), &square_coaster())
            .execute()
            .unwrap();
        let (lo, hi) = region_bounds(&ring.area).unwrap();
        let half_diag = 120.0 * std::f64::consts::SQRT_2;
        assert_relative_eq!(hi.x, half_diag, epsilon = 1e-9);
        assert_relative_eq!(lo.y, -half_diag, epsilon = 1e-9);
    }

    #[test]
    fn non_square_rectangle_keeps_orientation() {
        let shape = ShapeParams::rectangle(Extent::new(200.0, 100.0), Extent::new(160.0, 60.0)).unwrap();
        let ring = MakeRing::new(&Placement::new(0.0, 0.0, 90.0), &shape).execute().unwrap();
        let (lo, hi) = region_bounds(&ring.area).unwrap();
        assert_relative_eq!(hi.x - lo.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(hi.y - lo.y, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn polygon_first_vertex_carries_alignment_offset() {
        let shape = ShapeParams::polygon(6, 288.0, 216.0).unwrap();
        let ring = MakeRing::new(&Placement::new(0.0, 0.0, 10.0), &shape).execute().unwrap();
        let verts = ring.outer_vertices();
        assert_eq!(verts.len(), 6);

        // 10° of rotation plus the 180/6 = 30° alignment offset.
        let theta = 40.0_f64.to_radians();
        assert_relative_eq!(verts[0].x, 144.0 * theta.cos(), epsilon = 1e-9);
        assert_relative_eq!(verts[0].y, 144.0 * theta.sin(), epsilon = 1e-9);

        let inner = ring.inner_vertices();
        assert_relative_eq!(inner[0].x, 108.0 * theta.cos(), epsilon = 1e-9);
    }

    #[test]
    fn polygon_ring_area() {
        let shape = ShapeParams::polygon(4, 200.0, 100.0).unwrap();
        let ring = MakeRing::new(&Placement::new(5.0, -5.0, 0.0), &shape).execute().unwrap();
        // Square with circumradius r has area 2r².
        let expected = 2.0 * 100.0 * 100.0 - 2.0 * 50.0 * 50.0;
        assert_relative_eq!(ring.area.unsigned_area(), expected, epsilon = 1e-6);

        // Flat edges: square is axis aligned with half side r/√2.
        let (lo, hi) = region_bounds(&ring.area).unwrap();
        let half = 100.0 / std::f64::consts::SQRT_2;
        assert_relative_eq!(lo.x, 5.0 - half, epsilon = 1e-9);
        assert_relative_eq!(hi.y, -5.0 + half, epsilon = 1e-9);
    }

    #[test]
    fn rotation_wraps_around() {
        let shape = ShapeParams::polygon(5, 200.0, 150.0).unwrap();
        let a = MakeRing::new(&Placement::new(0.0, 0.0, 15.0), &shape).execute().unwrap();
        let b = MakeRing::new(&Placement::new(0.0, 0.0, 375.0), &shape).execute().unwrap();
        let c = MakeRing::new(&Placement::new(0.0, 0.0, -345.0), &shape).execute().unwrap();
        for (p, q) in a.outer_vertices().iter().zip(b.outer_vertices().iter()) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-9);
        }
        for (p, q) in a.outer_vertices().iter().zip(c.outer_vertices().iter()) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn inner_polygon_matches_ring_hole() {
        let placement = Placement::new(40.0, 60.0, 30.0);
        for shape in [square_coaster(), ShapeParams::polygon(7, 300.0, 200.0).unwrap()] {
            let op = MakeRing::new(&placement, &shape);
            let ring = op.execute().unwrap();
            let hole = op.inner_polygon().unwrap();
            assert_eq!(hole, ring.inner);
        }
    }

    #[test]
    fn vertex_round_trip_reproduces_ring() {
        let shape = ShapeParams::polygon(8, 240.0, 180.0).unwrap();
        let ring = MakeRing::new(&Placement::new(12.0, -7.0, 45.0), &shape).execute().unwrap();
        let rebuilt = Ring::from_vertices(&ring.outer_vertices(), &ring.inner_vertices());

        assert_eq!(rebuilt.outer_vertices().len(), ring.outer_vertices().len());
        for (p, q) in rebuilt.outer_vertices().iter().zip(ring.outer_vertices().iter()) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-9);
        }
        for (p, q) in rebuilt.inner_vertices().iter().zip(ring.inner_vertices().iter()) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-9);
        }
        assert_relative_eq!(rebuilt.area_size(), ring.area_size(), epsilon = 1e-6);
    }

    #[test]
    fn malformed_shape_is_rejected() {
        let mut shape = square_coaster();
        shape.inner = Extent::square(300.0);
        assert!(MakeRing::new(&Placement::new(0.0, 0.0, 0.0), &shape).execute().is_err());
    }

    #[test]
    fn polygon_outline_is_counter_clockwise() {
        let shape = ShapeParams::polygon(7, 200.0, 120.0).unwrap();
        let ring = MakeRing::new(&Placement::new(10.0, 20.0, 45.0), &shape).execute().unwrap();
        let area = ring.outer.signed_area();
        assert!(area > 0.0);
        assert_relative_eq!(area, ring.outer.unsigned_area(), epsilon = 1e-6);
    }

    #[test]
    fn non_finite_placement_is_degenerate() {
        let err = MakeRing::new(&Placement::new(f64::NAN, 0.0, 0.0), &square_coaster())
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::LayoutError::Geometry(GeometryError::Degenerate(_))
        ));
    }
}
