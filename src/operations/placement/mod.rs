mod grid;
mod params;
mod place;

pub use grid::{SlotGrid, CELL_SCALE};
pub use params::{LayoutParams, RotationMode};
pub use place::PlaceCoasters;
