use geo::orient::Direction;
use geo::{Coord, MapCoords, MultiPolygon, Orient, Polygon};

use crate::geometry::Ring;
use crate::math::polygon_2d::{to_coord, to_point};
use crate::math::{Point2, Vector2};

/// Reflects geometry across a line given by a point on it and its normal.
///
/// Reflection reverses vertex order, so outputs are re-oriented with
/// counter-clockwise exteriors and clockwise holes.
pub struct Mirror {
    line_origin: Point2,
    line_normal: Vector2,
}

impl Mirror {
    /// Creates a left-right `Mirror` across the vertical line at `x`.
    #[must_use]
    pub fn left_right(x: f64) -> Self {
        Self {
            line_origin: Point2::new(x, 0.0),
            line_normal: Vector2::x(),
        }
    }

    /// Mirrors a region.
    #[must_use]
    pub fn region(&self, region: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        region
            .map_coords(|c| self.reflect(c))
            .orient(Direction::Default)
    }

    /// Mirrors all three parts of a ring.
    #[must_use]
    pub fn ring(&self, ring: &Ring) -> Ring {
        Ring {
            outer: self.polygon(&ring.outer),
            inner: self.polygon(&ring.inner),
            area: self.region(&ring.area),
        }
    }

    fn polygon(&self, polygon: &Polygon<f64>) -> Polygon<f64> {
        polygon
            .map_coords(|c| self.reflect(c))
            .orient(Direction::Default)
    }

    fn reflect(&self, c: Coord<f64>) -> Coord<f64> {
        let p = to_point(c);
        let d = (p - self.line_origin).dot(&self.line_normal);
        to_coord(&(p - self.line_normal * (2.0 * d)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use geo::Area;

    use super::*;
    use crate::geometry::{Placement, ShapeParams};
    use crate::math::polygon_2d::region_bounds;
    use crate::operations::creation::MakeRing;

    fn ring_at(rotation: f64) -> Ring {
        MakeRing::new(&Placement::new(0.0, 0.0, rotation), &ShapeParams::default())
            .execute()
            .unwrap()
    }

    #[test]
    fn left_right_mirror_keeps_bounds_around_axis() {
        let ring = ring_at(15.0);
        let (lo, hi) = region_bounds(&ring.area).unwrap();
        let mirrored = Mirror::left_right(0.0).ring(&ring);
        let (mlo, mhi) = region_bounds(&mirrored.area).unwrap();

        assert_relative_eq!(mlo.x, -hi.x, epsilon = 1e-9);
        assert_relative_eq!(mhi.x, -lo.x, epsilon = 1e-9);
        assert_relative_eq!(mlo.y, lo.y, epsilon = 1e-9);
        assert_relative_eq!(mhi.y, hi.y, epsilon = 1e-9);
        assert_relative_eq!(mirrored.area_size(), ring.area_size(), epsilon = 1e-6);
    }

    #[test]
    fn rotation_is_reversed_by_mirror() {
        // Mirroring across x = 0 turns a +15° square into a -15° one.
        let mirrored = Mirror::left_right(0.0).ring(&ring_at(15.0));
        let targets = ring_at(-15.0).outer_vertices();
        for p in mirrored.outer_vertices() {
            assert!(
                targets.iter().any(|q| (p - q).norm() < 1e-9),
                "mirrored vertex {p:?} not found in {targets:?}"
            );
        }
    }

    #[test]
    fn mirrored_outlines_stay_counter_clockwise() {
        let mirrored = Mirror::left_right(40.0).ring(&ring_at(30.0));
        assert!(mirrored.outer.signed_area() > 0.0);
        assert!(mirrored.inner.signed_area() > 0.0);
        for part in &mirrored.area.0 {
            assert!(part.exterior().is_closed());
            assert!(Polygon::new(part.exterior().clone(), vec![]).signed_area() > 0.0);
        }
    }

    #[test]
    fn oblique_line_reflection() {
        // Line y = x through the origin swaps the coordinates.
        let mirror = Mirror {
            line_origin: Point2::origin(),
            line_normal: Vector2::new(1.0, -1.0).normalize(),
        };
        let c = mirror.reflect(Coord { x: 4.0, y: 7.0 });
        assert_relative_eq!(c.x, 7.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 4.0, epsilon = 1e-12);
    }
}
