use crate::geometry::Ring;
use crate::math::distance_2d::point_to_boundary_dist;
use crate::math::polygon_2d::region_contains;

/// Vertex-exclusion predicate.
///
/// No outer or inner vertex of the candidate may lie inside any existing
/// ring's material, and every such vertex must keep at least `tolerance`
/// distance from that ring's boundary (outer edge and hole edge alike).
#[must_use]
pub fn vertex_exclusion(candidate: &Ring, existing: &[Ring], tolerance: f64) -> bool {
    let mut vertices = candidate.outer_vertices();
    vertices.extend(candidate.inner_vertices());

    existing.iter().all(|other| {
        vertices.iter().all(|p| {
            !region_contains(&other.area, p) && point_to_boundary_dist(p, &other.area) >= tolerance
        })
    })
}
