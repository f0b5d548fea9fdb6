use geo::{Area, BoundingRect, Contains, Coord, LineString, MapCoords, MultiPolygon, Point, Polygon};

use super::{Isometry2, Point2, AREA_EPSILON, TOLERANCE};

/// Converts a `Point2` to a `geo` coordinate.
#[must_use]
pub fn to_coord(p: &Point2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Converts a `geo` coordinate to a `Point2`.
#[must_use]
pub fn to_point(c: Coord<f64>) -> Point2 {
    Point2::new(c.x, c.y)
}

/// Builds a simple polygon (no holes) from its vertices. The ring is closed
/// automatically.
#[must_use]
pub fn polygon_from_points(points: &[Point2]) -> Polygon<f64> {
    Polygon::new(LineString::from(points.iter().map(to_coord).collect::<Vec<_>>()), vec![])
}

/// Returns the vertices of a closed ring without the repeated closing vertex.
#[must_use]
pub fn ring_vertices(ring: &LineString<f64>) -> Vec<Point2> {
    let mut points: Vec<Point2> = ring.coords().map(|c| to_point(*c)).collect();
    if points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first - last).norm() < TOLERANCE {
            points.pop();
        }
    }
    points
}

/// Unsigned area of a region, clamped to zero for slivers below [`AREA_EPSILON`].
#[must_use]
pub fn effective_area(region: &MultiPolygon<f64>) -> f64 {
    let area = region.unsigned_area();
    if area < AREA_EPSILON {
        0.0
    } else {
        area
    }
}

/// Returns `true` when a region has no meaningful area.
#[must_use]
pub fn is_effectively_empty(region: &MultiPolygon<f64>) -> bool {
    effective_area(region) == 0.0
}

/// Strict interior containment: points on the boundary are not contained.
#[must_use]
pub fn polygon_contains(polygon: &Polygon<f64>, p: &Point2) -> bool {
    polygon.contains(&Point::new(p.x, p.y))
}

/// Strict interior containment for a multi-part region.
#[must_use]
pub fn region_contains(region: &MultiPolygon<f64>, p: &Point2) -> bool {
    region.0.iter().any(|polygon| polygon_contains(polygon, p))
}

/// Applies a rigid transform to every coordinate of a polygon.
#[must_use]
pub fn transform_polygon(polygon: &Polygon<f64>, iso: &Isometry2) -> Polygon<f64> {
    polygon.map_coords(|c| to_coord(&(iso * to_point(c))))
}

/// Applies a rigid transform to every coordinate of a region.
#[must_use]
pub fn transform_region(region: &MultiPolygon<f64>, iso: &Isometry2) -> MultiPolygon<f64> {
    region.map_coords(|c| to_coord(&(iso * to_point(c))))
}

/// Axis-aligned bounds `(min, max)` of a region, or `None` when it has no
/// coordinates.
#[must_use]
pub fn region_bounds(region: &MultiPolygon<f64>) -> Option<(Point2, Point2)> {
    let rect = region.bounding_rect()?;
    Some((to_point(rect.min()), to_point(rect.max())))
}
