mod double_overlap;
mod shared_gap;
mod vertex_exclusion;

pub use double_overlap::double_overlap_cap;
pub use shared_gap::shared_gap;
pub use vertex_exclusion::vertex_exclusion;

use tracing::trace;

use crate::error::Result;
use crate::geometry::{Placement, Ring, ShapeParams};
use crate::operations::creation::MakeRing;

/// Default minimum clearance for the vertex predicates.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Default area above which an overlap counts as significant.
pub const DEFAULT_OVERLAP_AREA_THRESHOLD: f64 = 1.0;

/// Outcome of each predicate, evaluated without short-circuiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintReport {
    pub shared_gap: bool,
    pub vertex_exclusion: bool,
    pub double_overlap: bool,
}

impl ConstraintReport {
    /// All three predicates hold.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        self.shared_gap && self.vertex_exclusion && self.double_overlap
    }
}

/// Decides whether a candidate placement may join the existing set.
pub struct Admissible<'a> {
    candidate: Placement,
    existing: &'a [Placement],
    shape: ShapeParams,
    tolerance: f64,
    overlap_area_threshold: f64,
}

impl<'a> Admissible<'a> {
    /// Creates a new `Admissible` check with default tolerance and threshold.
    #[must_use]
    pub fn new(candidate: &Placement, existing: &'a [Placement], shape: &ShapeParams) -> Self {
        Self {
            candidate: *candidate,
            existing,
            shape: *shape,
            tolerance: DEFAULT_TOLERANCE,
            overlap_area_threshold: DEFAULT_OVERLAP_AREA_THRESHOLD,
        }
    }

    /// Sets the minimum vertex clearance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the area above which an overlap counts.
    #[must_use]
    pub fn with_overlap_area_threshold(mut self, threshold: f64) -> Self {
        self.overlap_area_threshold = threshold;
        self
    }

    /// Executes the check, stopping at the first failing predicate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the shape parameters are malformed.
    pub fn execute(&self) -> Result<bool> {
        let (candidate, existing) = self.rings()?;
        Ok(admissible_rings(
            &candidate,
            &existing,
            self.tolerance,
            self.overlap_area_threshold,
        ))
    }

    /// Evaluates every predicate and reports each outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if the shape parameters are malformed.
    pub fn report(&self) -> Result<ConstraintReport> {
        let (candidate, existing) = self.rings()?;
        Ok(ConstraintReport {
            shared_gap: shared_gap(&candidate, &existing, self.tolerance),
            vertex_exclusion: vertex_exclusion(&candidate, &existing, self.tolerance),
            double_overlap: double_overlap_cap(&candidate, &existing, self.overlap_area_threshold),
        })
    }

    fn rings(&self) -> Result<(Ring, Vec<Ring>)> {
        let candidate = MakeRing::new(&self.candidate, &self.shape).execute()?;
        let existing = self
            .existing
            .iter()
            .map(|p| MakeRing::new(p, &self.shape).execute())
            .collect::<Result<Vec<_>>>()?;
        Ok((candidate, existing))
    }
}

/// Admissibility over already-built rings.
///
/// Shared gap, vertex exclusion, and the double-overlap cap must all hold.
#[must_use]
pub fn admissible_rings(
    candidate: &Ring,
    existing: &[Ring],
    tolerance: f64,
    overlap_area_threshold: f64,
) -> bool {
    if !shared_gap(candidate, existing, tolerance) {
        trace!("rejected: no shared gap");
        return false;
    }
    if !vertex_exclusion(candidate, existing, tolerance) {
        trace!("rejected: vertex inside or near an existing ring");
        return false;
    }
    if !double_overlap_cap(candidate, existing, overlap_area_threshold) {
        trace!("rejected: overlaps two or more existing rings");
        return false;
    }
    true
}
