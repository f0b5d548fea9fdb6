use geo::Polygon;

use crate::geometry::Ring;
use crate::math::distance_2d::point_to_polygon_boundary_dist;
use crate::math::polygon_2d::polygon_contains;
use crate::math::Point2;

/// Shared-gap predicate.
///
/// Holds when, for some existing piece, one of the candidate's outer
/// vertices and one of its inner vertices both sit inside that piece's hole
/// with more than `tolerance` clearance from the hole's edge. Starts false;
/// the first matching piece settles it.
#[must_use]
pub fn shared_gap(candidate: &Ring, existing: &[Ring], tolerance: f64) -> bool {
    let outer = candidate.outer_vertices();
    let inner = candidate.inner_vertices();

    existing.iter().any(|other| {
        let hole = &other.inner;
        outer.iter().any(|p| inside_with_margin(hole, p, tolerance))
            && inner.iter().any(|p| inside_with_margin(hole, p, tolerance))
    })
}

fn inside_with_margin(hole: &Polygon<f64>, p: &Point2, tolerance: f64) -> bool {
    polygon_contains(hole, p) && point_to_polygon_boundary_dist(p, hole) > tolerance
}
