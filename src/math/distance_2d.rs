use geo::{LineString, MultiPolygon, Polygon};

use super::Point2;

/// Returns the minimum distance from `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).norm()
}

/// Returns the minimum distance from `p` to any segment of `ring`.
///
/// An empty line string is infinitely far away.
#[must_use]
pub fn point_to_line_string_dist(p: &Point2, ring: &LineString<f64>) -> f64 {
    ring.lines()
        .map(|line| {
            let a = Point2::new(line.start.x, line.start.y);
            let b = Point2::new(line.end.x, line.end.y);
            point_to_segment_dist(p, &a, &b)
        })
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `p` to the boundary of a polygon (exterior and every hole).
#[must_use]
pub fn point_to_polygon_boundary_dist(p: &Point2, polygon: &Polygon<f64>) -> f64 {
    polygon
        .interiors()
        .iter()
        .map(|hole| point_to_line_string_dist(p, hole))
        .fold(point_to_line_string_dist(p, polygon.exterior()), f64::min)
}

/// Distance from `p` to the boundary of a multi-polygon.
#[must_use]
pub fn point_to_boundary_dist(p: &Point2, area: &MultiPolygon<f64>) -> f64 {
    area.0
        .iter()
        .map(|polygon| point_to_polygon_boundary_dist(p, polygon))
        .fold(f64::INFINITY, f64::min)
}
