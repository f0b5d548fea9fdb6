use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::polygon_2d::region_bounds;
use crate::math::Vector2;
use crate::operations::overlap::{OverlapCategory, OverlapRegion, PieceOverlaps};
use crate::operations::transform::{Mirror, Translate};

/// Mirrored duplicate of a piece, drawn in the second row.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredItem {
    pub ring: Ring,
    /// Only the overlaps with earlier pieces.
    pub overlaps: Vec<OverlapRegion>,
}

/// One piece laid out on its own on the cutting sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetItem {
    pub index: usize,
    pub ring: Ring,
    pub overlaps: Vec<OverlapRegion>,
    pub mirrored: Option<MirroredItem>,
}

/// Pieces separated side by side, with canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub items: Vec<SheetItem>,
    pub width: f64,
    pub height: f64,
}

/// Lays classified pieces out in a row, `margin` apart, and adds a mirrored
/// copy in a second row for every piece overlapping an earlier one.
pub struct ArrangeSheet<'a> {
    pieces: &'a [PieceOverlaps],
    margin: f64,
}

impl<'a> ArrangeSheet<'a> {
    /// Creates a new `ArrangeSheet` operation.
    #[must_use]
    pub fn new(pieces: &'a [PieceOverlaps], margin: f64) -> Self {
        Self { pieces, margin }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a piece's ring has no
    /// coordinates.
    pub fn execute(&self) -> Result<Sheet> {
        let margin = self.margin;
        let mut cursor = margin;
        let mut max_height: f64 = 0.0;
        let mut items = Vec::with_capacity(self.pieces.len());

        for piece in self.pieces {
            let (lo, hi) = region_bounds(&piece.ring.area).ok_or_else(|| {
                OperationError::InvalidInput(format!("piece {} has an empty ring", piece.index))
            })?;
            let size = hi - lo;
            max_height = max_height.max(size.y);

            let shift = Translate::new(Vector2::new(cursor - lo.x, margin - lo.y));
            let overlaps = piece
                .overlaps
                .iter()
                .map(|o| OverlapRegion {
                    region: shift.region(&o.region),
                    ..o.clone()
                })
                .collect();
            items.push(SheetItem {
                index: piece.index,
                ring: shift.ring(&piece.ring),
                overlaps,
                mirrored: None,
            });
            cursor += size.x + margin;
        }

        let second_row = Translate::new(Vector2::new(0.0, max_height + 2.0 * margin));
        for item in &mut items {
            item.mirrored = mirrored_copy(item, &second_row);
        }

        Ok(Sheet {
            items,
            width: cursor + margin,
            height: 3.0 * margin + 2.0 * max_height,
        })
    }
}

/// Mirrors an arranged item left to right about its own center line and
/// moves it to the second row. `None` if it has no earlier neighbor.
fn mirrored_copy(item: &SheetItem, second_row: &Translate) -> Option<MirroredItem> {
    if !item
        .overlaps
        .iter()
        .any(|o| o.category == OverlapCategory::EarlierNeighbor)
    {
        return None;
    }
    let (lo, hi) = region_bounds(&item.ring.area)?;
    let mirror = Mirror::left_right((lo.x + hi.x) / 2.0);

    let overlaps = item
        .overlaps
        .iter()
        .filter(|o| o.category == OverlapCategory::EarlierNeighbor)
        .map(|o| OverlapRegion {
            region: second_row.region(&mirror.region(&o.region)),
            ..o.clone()
        })
        .collect();

    Some(MirroredItem {
        ring: second_row.ring(&mirror.ring(&item.ring)),
        overlaps,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Placement, ShapeParams};
    use crate::operations::overlap::ClassifyOverlaps;

    fn classified(placements: &[Placement]) -> Vec<PieceOverlaps> {
        ClassifyOverlaps::new(placements, &ShapeParams::default())
            .execute()
            .unwrap()
    }

    #[test]
    fn pieces_are_laid_side_by_side() {
        let pieces = classified(&[Placement::new(0.0, 0.0, 0.0), Placement::new(220.0, 220.0, 0.0)]);
        let sheet = ArrangeSheet::new(&pieces, 50.0).execute().unwrap();

        let (a_lo, _) = region_bounds(&sheet.items[0].ring.area).unwrap();
        let (b_lo, _) = region_bounds(&sheet.items[1].ring.area).unwrap();
        assert_relative_eq!(a_lo.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(a_lo.y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(b_lo.x, 340.0, epsilon = 1e-9);
        assert_relative_eq!(b_lo.y, 50.0, epsilon = 1e-9);

        // 50 + 240 + 50 + 240 + 50 = 630, plus the closing margin.
        assert_relative_eq!(sheet.width, 680.0, epsilon = 1e-9);
        assert_relative_eq!(sheet.height, 630.0, epsilon = 1e-9);
    }

    #[test]
    fn overlap_regions_move_with_their_piece() {
        let pieces = classified(&[Placement::new(0.0, 0.0, 0.0), Placement::new(220.0, 220.0, 0.0)]);
        let sheet = ArrangeSheet::new(&pieces, 50.0).execute().unwrap();

        // Piece 0's overlap sits in its top-right corner: [100, 120]² → [270, 290]².
        let (lo, hi) = region_bounds(&sheet.items[0].overlaps[0].region).unwrap();
        assert_relative_eq!(lo.x, 270.0, epsilon = 1e-9);
        assert_relative_eq!(hi.y, 290.0, epsilon = 1e-9);
    }

    #[test]
    fn only_pieces_with_earlier_neighbors_are_mirrored() {
        let pieces = classified(&[Placement::new(0.0, 0.0, 0.0), Placement::new(220.0, 220.0, 0.0)]);
        let sheet = ArrangeSheet::new(&pieces, 50.0).execute().unwrap();
        assert!(sheet.items[0].mirrored.is_none());

        let mirrored = sheet.items[1].mirrored.as_ref().unwrap();
        assert_eq!(mirrored.overlaps.len(), 1);
        assert_eq!(mirrored.overlaps[0].category, OverlapCategory::EarlierNeighbor);

        // Second row starts at 50 + 240 + 2 × 50.
        let (lo, hi) = region_bounds(&mirrored.ring.area).unwrap();
        assert_relative_eq!(lo.y, 390.0, epsilon = 1e-9);
        assert_relative_eq!(lo.x, 340.0, epsilon = 1e-9);
        assert_relative_eq!(hi.x, 580.0, epsilon = 1e-9);

        // Piece 1's overlap sits at its low-x corner, [340, 360] × [50, 70];
        // mirrored about x = 460 it moves to the high-x side.
        let (olo, ohi) = region_bounds(&mirrored.overlaps[0].region).unwrap();
        assert_relative_eq!(olo.x, 560.0, epsilon = 1e-9);
        assert_relative_eq!(ohi.x, 580.0, epsilon = 1e-9);
        assert_relative_eq!(olo.y, 390.0, epsilon = 1e-9);
        assert_relative_eq!(ohi.y, 410.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_layout_gives_margin_only_sheet() {
        let sheet = ArrangeSheet::new(&[], 50.0).execute().unwrap();
        assert!(sheet.items.is_empty());
        assert_relative_eq!(sheet.width, 100.0);
        assert_relative_eq!(sheet.height, 150.0);
    }
}
