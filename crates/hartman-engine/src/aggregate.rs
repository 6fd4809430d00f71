//! Dimension-level reduction of the 18 item cells.

use crate::diff::ItemCells;
use crate::flagged::Flagged;
use hartman_axiology::{Dimension, DimensionMap};
use serde::Serialize;

/// `dimension_score >= 15` is remarkable.
pub const DIMENSION_SCORE_THRESHOLD: i32 = 15;

/// `|net| >= 4` is remarkable.
pub const NET_THRESHOLD: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScores {
    /// Sum of `|diff|` over the dimension's six cells.
    pub dimension_score: Flagged<i32>,
    pub integration_score: i32,
    /// Sum of the positive diffs.
    pub positives_count: i32,
    /// Sum of the magnitudes of the negative diffs.
    pub negatives_count: i32,
    pub positives_negatives_net: Flagged<i32>,
}

impl DimensionScores {
    pub fn compute(cells: &ItemCells, dimension: Dimension) -> Self {
        let mut score = 0;
        let mut integration = 0;
        let mut positives = 0;
        let mut negatives = 0;

        for &pos in dimension.cell_positions() {
            let diff = cells.diff(pos);
            score += diff.abs();
            integration += cells.integration[pos];
            if diff > 0 {
                positives += diff;
            } else {
                negatives -= diff;
            }
        }

        let net = positives - negatives;
        Self {
            dimension_score: Flagged::when(score, |s| *s >= DIMENSION_SCORE_THRESHOLD),
            integration_score: integration,
            positives_count: positives,
            negatives_count: negatives,
            positives_negatives_net: Flagged::when(net, |n| n.abs() >= NET_THRESHOLD),
        }
    }
}

pub fn aggregate(cells: &ItemCells) -> DimensionMap<DimensionScores> {
    DimensionMap::from_fn(|dim| DimensionScores::compute(cells, dim))
}
