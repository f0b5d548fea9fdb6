mod arrange;
mod composite;

pub use arrange::{ArrangeSheet, MirroredItem, Sheet, SheetItem};
pub use composite::{Composite, CompositeView, SheetBounds};
