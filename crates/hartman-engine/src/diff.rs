//! Per-item deviation from the canonical ranking.
//!
//! For canonical value `c` and response `r` at the same position:
//! - `diff = c - r` when `c <= 9`, else `r - c`;
//! - distortion when `r` sits on the other half of the scale than `c`;
//! - a diff is remarkable when `|diff| > 6` or `|diff| > 3/5 * max|diff|`
//!   over the same submission;
//! - integration value is `max(|diff| - 2, 0)`.

use crate::flagged::Flagged;
use crate::responses::Responses;
use hartman_axiology::{CANONICAL_RANKING, ITEM_COUNT, MIDPOINT};
use serde::Serialize;

/// Absolute diff above which an item is always remarkable.
pub const REMARKABLE_ABS_DIFF: i32 = 6;

/// Slack subtracted from `|diff|` before it counts towards integration.
pub const INTEGRATION_SLACK: i32 = 2;

pub fn item_diff(canonical: u8, response: u8) -> i32 {
    let (c, r) = (i32::from(canonical), i32::from(response));
    if canonical <= MIDPOINT {
        c - r
    } else {
        r - c
    }
}

pub fn is_distortion(canonical: u8, response: u8) -> bool {
    (canonical <= MIDPOINT) != (response <= MIDPOINT)
}

pub fn integration_value(diff: i32) -> i32 {
    (diff.abs() - INTEGRATION_SLACK).max(0)
}

/// Item-level cells of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCells {
    /// Submitted ranks; `remarked` marks a distortion.
    pub responses: [Flagged<i32>; ITEM_COUNT],
    /// Diffs; `remarked` marks a remarkable diff.
    pub diffs: [Flagged<i32>; ITEM_COUNT],
    pub integration: [i32; ITEM_COUNT],
}

impl ItemCells {
    pub fn compute(responses: &Responses) -> Self {
        let ranks = responses.as_array();

        let annotated: [Flagged<i32>; ITEM_COUNT] = std::array::from_fn(|i| {
            Flagged::new(i32::from(ranks[i]), is_distortion(CANONICAL_RANKING[i], ranks[i]))
        });
        let raw: [i32; ITEM_COUNT] = std::array::from_fn(|i| item_diff(CANONICAL_RANKING[i], ranks[i]));

        // |diff| > 3/5 * max  <=>  5 * |diff| > 3 * max
        let max_abs = raw.iter().map(|d| d.abs()).max().unwrap_or(0);
        let diffs = raw.map(|d| {
            Flagged::when(d, |d| d.abs() > REMARKABLE_ABS_DIFF || 5 * d.abs() > 3 * max_abs)
        });

        Self {
            responses: annotated,
            diffs,
            integration: raw.map(integration_value),
        }
    }

    pub fn diff(&self, index: usize) -> i32 {
        self.diffs[index].value
    }

    pub fn is_distortion(&self, index: usize) -> bool {
        self.responses[index].remarked
    }

    pub fn distortion_count(&self) -> i32 {
        self.responses.iter().filter(|r| r.remarked).count() as i32
    }
}
