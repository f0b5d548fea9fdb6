use crate::geometry::Ring;
use crate::math::polygon_2d::effective_area;

/// Double-overlap cap.
///
/// A candidate may overlap at most one existing ring by more than
/// `overlap_area_threshold`. Returns `false` as soon as a second significant
/// overlap is found.
#[must_use]
pub fn double_overlap_cap(candidate: &Ring, existing: &[Ring], overlap_area_threshold: f64) -> bool {
    let mut significant = 0;
    for other in existing {
        if effective_area(&candidate.intersection(other)) > overlap_area_threshold {
            significant += 1;
            if significant >= 2 {
                return false;
            }
        }
    }
    true
}
