use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{PlacedPiece, Placement, PlacementOrigin, Ring};
use crate::math::{Point2, Vector2};
use crate::operations::constraint::admissible_rings;
use crate::operations::creation::MakeRing;

use super::grid::SlotGrid;
use super::params::LayoutParams;

/// Places `count` pieces on a jittered grid, one slot at a time.
///
/// Each slot gets up to `max_retries_per_slot` randomized candidates; the
/// first admissible one is accepted. When the budget runs out the piece is
/// put at the ideal cell center without checks, so the result always holds
/// exactly `count` pieces. Accepted pieces are never revisited.
pub struct PlaceCoasters {
    params: LayoutParams,
}

impl PlaceCoasters {
    /// Creates a new `PlaceCoasters` operation.
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Executes the placement, drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout parameters are invalid. Nothing is
    /// placed in that case.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<PlacedPiece>> {
        let params = &self.params;
        params.validate()?;

        let grid = SlotGrid::new(params.count, &params.shape, params.margin);
        let mut pieces: Vec<PlacedPiece> = Vec::with_capacity(params.count);
        let mut rings: Vec<Ring> = Vec::with_capacity(params.count);

        for (slot, ideal) in grid.ideal_centers().enumerate() {
            let (piece, ring) = match self.try_slot(&grid, ideal, &rings, rng)? {
                Some(accepted) => accepted,
                None => {
                    let placement = Placement {
                        center: ideal,
                        rotation: self.pick_rotation(rng),
                    };
                    debug!(
                        slot,
                        retries = params.max_retries_per_slot,
                        "retry budget exhausted, using fallback placement"
                    );
                    let ring = MakeRing::new(&placement, &params.shape).execute()?;
                    let piece = PlacedPiece {
                        placement,
                        origin: PlacementOrigin::Fallback,
                    };
                    (piece, ring)
                }
            };
            pieces.push(piece);
            rings.push(ring);
        }

        debug!(
            count = pieces.len(),
            fallbacks = pieces.iter().filter(|p| p.is_fallback()).count(),
            "placement finished"
        );
        Ok(pieces)
    }

    /// Samples candidates for one slot until one is admissible against the
    /// accepted rings or the retry budget is spent.
    fn try_slot<R: Rng + ?Sized>(
        &self,
        grid: &SlotGrid,
        ideal: Point2,
        accepted: &[Ring],
        rng: &mut R,
    ) -> Result<Option<(PlacedPiece, Ring)>> {
        let params = &self.params;
        let bound = grid.jitter_bound();

        for attempt in 0..params.max_retries_per_slot {
            let offset = Vector2::new(
                rng.gen_range(-bound.x..=bound.x),
                rng.gen_range(-bound.y..=bound.y),
            );
            let placement = Placement {
                center: ideal + offset,
                rotation: self.pick_rotation(rng),
            };
            let ring = MakeRing::new(&placement, &params.shape).execute()?;

            // The first piece has nothing to conflict with.
            if accepted.is_empty()
                || admissible_rings(
                    &ring,
                    accepted,
                    params.tolerance,
                    params.overlap_area_threshold,
                )
            {
                trace!(attempt, x = placement.center.x, y = placement.center.y, "candidate accepted");
                let piece = PlacedPiece {
                    placement,
                    origin: PlacementOrigin::Validated,
                };
                return Ok(Some((piece, ring)));
            }
        }
        Ok(None)
    }

    fn pick_rotation<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let angles = self.params.rotation.allowed_angles(self.params.shape.kind);
        // Angle sets are never empty.
        angles.choose(rng).copied().unwrap_or(0.0)
    }
}
