pub mod constraint;
pub mod creation;
pub mod overlap;
pub mod placement;
pub mod sheet;
pub mod transform;
