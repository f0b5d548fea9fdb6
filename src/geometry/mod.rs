pub mod placement;
pub mod ring;
pub mod shape;

pub use placement::{PlacedPiece, Placement, PlacementOrigin};
pub use ring::Ring;
pub use shape::{Extent, ShapeKind, ShapeParams};
