pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rigid transform (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Regions with an area below this are treated as empty.
pub const AREA_EPSILON: f64 = 1e-9;
