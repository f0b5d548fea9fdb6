pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{LayoutError, Result};
pub use geometry::{Extent, PlacedPiece, Placement, PlacementOrigin, Ring, ShapeKind, ShapeParams};
pub use operations::constraint::{Admissible, ConstraintReport};
pub use operations::creation::MakeRing;
pub use operations::overlap::{ClassifyOverlaps, OverlapCategory, OverlapRegion, PieceOverlaps};
pub use operations::placement::{LayoutParams, PlaceCoasters, RotationMode};
pub use operations::sheet::{
    ArrangeSheet, Composite, CompositeView, MirroredItem, Sheet, SheetBounds, SheetItem,
};
