use crate::error::{GeometryError, Result};

/// Outline of a coaster piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Regular polygon with the given number of sides (at least 3).
    Polygon { sides: usize },
    /// Axis-aligned rectangle at rotation 0.
    Rectangle,
}

/// Full width and height of an outline.
///
/// For regular polygons only `width` is meaningful: the circumradius is
/// `width / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Creates an extent with distinct width and height.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square extent.
    #[must_use]
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Circumradius used when the extent describes a regular polygon.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width * 0.5
    }
}

/// Shape shared by every piece in a layout: outline kind plus outer and
/// inner extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub kind: ShapeKind,
    pub outer: Extent,
    pub inner: Extent,
}

impl ShapeParams {
    /// Creates validated shape parameters.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if the side count is below 3 or the inner
    /// extent is not strictly between zero and the outer extent.
    pub fn new(kind: ShapeKind, outer: Extent, inner: Extent) -> Result<Self> {
        let shape = Self { kind, outer, inner };
        shape.validate()?;
        Ok(shape)
    }

    /// Rectangular ring with the given outer and inner sizes.
    ///
    /// # Errors
    ///
    /// See [`ShapeParams::new`].
    pub fn rectangle(outer: Extent, inner: Extent) -> Result<Self> {
        Self::new(ShapeKind::Rectangle, outer, inner)
    }

    /// Regular `sides`-gon ring with the given outer and inner widths.
    ///
    /// # Errors
    ///
    /// See [`ShapeParams::new`].
    pub fn polygon(sides: usize, outer_width: f64, inner_width: f64) -> Result<Self> {
        Self::new(
            ShapeKind::Polygon { sides },
            Extent::square(outer_width),
            Extent::square(inner_width),
        )
    }

    /// Checks the shape invariants: `outer > inner > 0` on every used axis.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        if let ShapeKind::Polygon { sides } = self.kind {
            if sides < 3 {
                return Err(GeometryError::TooFewSides(sides).into());
            }
        }

        check_axis("outer.width", "inner.width", self.outer.width, self.inner.width)?;
        if self.kind == ShapeKind::Rectangle {
            check_axis("outer.height", "inner.height", self.outer.height, self.inner.height)?;
        }
        Ok(())
    }
}

impl Default for ShapeParams {
    /// Square 240 × 240 coaster with a 192 × 192 hole.
    fn default() -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            outer: Extent::square(240.0),
            inner: Extent::square(192.0),
        }
    }
}

fn check_axis(outer_name: &'static str, inner_name: &'static str, outer: f64, inner: f64) -> Result<()> {
    if !outer.is_finite() || outer <= 0.0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: outer_name,
            value: outer,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    if !inner.is_finite() || inner <= 0.0 || inner >= outer {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: inner_name,
            value: inner,
            min: 0.0,
            max: outer,
        }
        .into());
    }
    Ok(())
}
