use crate::error::{OperationError, Result};
use crate::geometry::{ShapeKind, ShapeParams};
use crate::operations::constraint::{DEFAULT_OVERLAP_AREA_THRESHOLD, DEFAULT_TOLERANCE};

const RECTANGLE_ANGLES: [f64; 4] = [0.0, 15.0, 30.0, 45.0];
const POLYGON_ANGLES: [f64; 5] = [15.0, 30.0, 45.0, 60.0, 75.0];
const FIXED_ANGLES: [f64; 1] = [0.0];

/// Whether candidate rotations are sampled or pinned at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Randomized,
    Fixed,
}

impl RotationMode {
    /// Angles (degrees) a candidate may be rotated by.
    #[must_use]
    pub fn allowed_angles(self, kind: ShapeKind) -> &'static [f64] {
        match (self, kind) {
            (Self::Fixed, _) => &FIXED_ANGLES,
            (Self::Randomized, ShapeKind::Rectangle) => &RECTANGLE_ANGLES,
            (Self::Randomized, ShapeKind::Polygon { .. }) => &POLYGON_ANGLES,
        }
    }
}

/// Inputs of one placement run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub count: usize,
    pub shape: ShapeParams,
    pub margin: f64,
    pub tolerance: f64,
    pub overlap_area_threshold: f64,
    pub max_retries_per_slot: usize,
    pub rotation: RotationMode,
}

impl LayoutParams {
    /// Creates parameters for `count` pieces of `shape` with default margin
    /// (50), tolerance, overlap threshold, retry budget (50), and randomized
    /// rotation.
    #[must_use]
    pub fn new(count: usize, shape: ShapeParams) -> Self {
        Self {
            count,
            shape,
            margin: 50.0,
            tolerance: DEFAULT_TOLERANCE,
            overlap_area_threshold: DEFAULT_OVERLAP_AREA_THRESHOLD,
            max_retries_per_slot: 50,
            rotation: RotationMode::Randomized,
        }
    }

    /// Sets the canvas margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the vertex clearance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the significant-overlap area threshold.
    #[must_use]
    pub fn with_overlap_area_threshold(mut self, threshold: f64) -> Self {
        self.overlap_area_threshold = threshold;
        self
    }

    /// Sets the number of jittered attempts per grid slot.
    #[must_use]
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries_per_slot = retries;
        self
    }

    /// Sets the rotation mode.
    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationMode) -> Self {
        self.rotation = rotation;
        self
    }

    /// Checks the parameters before any placement work.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` for a malformed shape, or
    /// `OperationError::InvalidInput` for a negative or non-finite margin,
    /// tolerance or threshold.
    pub fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        for (name, value) in [
            ("margin", self.margin),
            ("tolerance", self.tolerance),
            ("overlap_area_threshold", self.overlap_area_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be a non-negative finite number, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }
}
