mod classify;

pub use classify::{violations, ClassifyOverlaps, OverlapCategory, OverlapRegion, PieceOverlaps};
