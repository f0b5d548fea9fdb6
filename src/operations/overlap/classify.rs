use std::cmp::Ordering;

use geo::MultiPolygon;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{Placement, Ring, ShapeParams};
use crate::math::polygon_2d::{effective_area, is_effectively_empty};
use crate::operations::creation::MakeRing;

/// Which side of the placement order the other piece is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapCategory {
    /// The other piece was placed before this one.
    EarlierNeighbor,
    /// The other piece was placed after this one.
    LaterNeighbor,
}

impl OverlapCategory {
    /// Category of the overlap between piece `index` and piece `other`,
    /// seen from `index`.
    #[must_use]
    pub fn between(index: usize, other: usize) -> Self {
        match index.cmp(&other) {
            Ordering::Greater => Self::EarlierNeighbor,
            Ordering::Less | Ordering::Equal => Self::LaterNeighbor,
        }
    }
}

/// Intersection of a piece's ring with one other ring.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapRegion {
    pub other: usize,
    pub region: MultiPolygon<f64>,
    pub category: OverlapCategory,
}

impl OverlapRegion {
    /// Area of the shared material.
    #[must_use]
    pub fn area(&self) -> f64 {
        effective_area(&self.region)
    }
}

/// A piece's ring together with every non-empty overlap it takes part in.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceOverlaps {
    pub index: usize,
    pub ring: Ring,
    pub overlaps: Vec<OverlapRegion>,
}

impl PieceOverlaps {
    /// A piece that overlaps an earlier piece gets a mirrored duplicate on
    /// the cutting sheet.
    #[must_use]
    pub fn needs_mirrored_copy(&self) -> bool {
        self.overlaps
            .iter()
            .any(|o| o.category == OverlapCategory::EarlierNeighbor)
    }

    /// Overlaps with the given category.
    pub fn with_category(&self, category: OverlapCategory) -> impl Iterator<Item = &OverlapRegion> {
        self.overlaps.iter().filter(move |o| o.category == category)
    }

    /// Number of neighbors overlapped by more than `threshold`.
    #[must_use]
    pub fn significant_count(&self, threshold: f64) -> usize {
        self.overlaps.iter().filter(|o| o.area() > threshold).count()
    }
}

/// Computes, for every piece, its overlap regions with all other pieces.
pub struct ClassifyOverlaps<'a> {
    placements: &'a [Placement],
    shape: ShapeParams,
}

impl<'a> ClassifyOverlaps<'a> {
    /// Creates a new `ClassifyOverlaps` query.
    #[must_use]
    pub fn new(placements: &'a [Placement], shape: &ShapeParams) -> Self {
        Self {
            placements,
            shape: *shape,
        }
    }

    /// Executes the query, returning one entry per piece in placement order.
    ///
    /// Each unordered pair is intersected once; the region is recorded on
    /// both pieces with opposite categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape parameters are malformed.
    pub fn execute(&self) -> Result<Vec<PieceOverlaps>> {
        let rings = self
            .placements
            .iter()
            .map(|p| MakeRing::new(p, &self.shape).execute())
            .collect::<Result<Vec<_>>>()?;

        let mut overlaps: Vec<Vec<OverlapRegion>> = vec![Vec::new(); rings.len()];
        for i in 0..rings.len() {
            for j in (i + 1)..rings.len() {
                let region = rings[i].intersection(&rings[j]);
                if is_effectively_empty(&region) {
                    continue;
                }
                overlaps[i].push(OverlapRegion {
                    other: j,
                    region: region.clone(),
                    category: OverlapCategory::between(i, j),
                });
                overlaps[j].push(OverlapRegion {
                    other: i,
                    region,
                    category: OverlapCategory::between(j, i),
                });
            }
        }

        let result: Vec<PieceOverlaps> = rings
            .into_iter()
            .zip(overlaps)
            .enumerate()
            .map(|(index, (ring, mut overlaps))| {
                overlaps.sort_by_key(|o| o.other);
                PieceOverlaps {
                    index,
                    ring,
                    overlaps,
                }
            })
            .collect();

        debug!(
            pieces = result.len(),
            pairs = result.iter().map(|p| p.overlaps.len()).sum::<usize>() / 2,
            "overlaps classified"
        );
        Ok(result)
    }
}

/// Indices of pieces that overlap two or more others by more than
/// `threshold`.
#[must_use]
pub fn violations(pieces: &[PieceOverlaps], threshold: f64) -> Vec<usize> {
    pieces
        .iter()
        .filter(|p| p.significant_count(threshold) >= 2)
        .map(|p| p.index)
        .collect()
}
