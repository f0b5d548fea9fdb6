use crate::math::Point2;

/// Position and orientation of one piece.
///
/// `rotation` is in degrees and is not normalized: negative values and
/// values above 360 are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Point2,
    pub rotation: f64,
}

impl Placement {
    /// Creates a placement at `(x, y)` rotated by `rotation` degrees.
    #[must_use]
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            rotation,
        }
    }
}

/// How an accepted placement got into the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOrigin {
    /// Passed the constraint checks (or was the first piece).
    Validated,
    /// Retry budget ran out; placed at the ideal cell center unchecked.
    Fallback,
}

/// A placement accepted by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPiece {
    pub placement: Placement,
    pub origin: PlacementOrigin,
}

impl PlacedPiece {
    /// Returns `true` if the piece was placed without passing the checks.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == PlacementOrigin::Fallback
    }
}
