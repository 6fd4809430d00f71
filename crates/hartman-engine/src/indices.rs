//! Whole-test composite indices.
//!
//! | Index | Formula | Remarkable |
//! |-------|---------|------------|
//! | DIF   | `I + E + S` dimension scores | `>= 40` |
//! | DIM   | `3 * max(score) - DIF` | never |
//! | INT   | sum of integration scores | never |
//! | distortions | count over 18 items | `> 0` |
//! | DIM%  | `round(DIM / DIF * 100)` | `>= 40` |
//! | INT%  | `round(INT / DIF * 100)` | `>= 40` |
//! | Q2    | `DIM + INT + distortions` | never |
//! | Q1    | `Q2 + DIF` | never |
//! | D.I.  | `3 * max(integration) - INT` | `>= 15` |
//! | AI%   | `round(negatives / DIF * 100)` | `>= 70` |

use crate::aggregate::DimensionScores;
use crate::config::ZeroDenominatorPolicy;
use crate::error::ScoringError;
use crate::flagged::Flagged;
use crate::percent::round_percent;
use hartman_axiology::DimensionMap;
use serde::Serialize;

pub const TOTAL_DEVIATION_THRESHOLD: i32 = 40;
pub const IMBALANCE_PERCENT_THRESHOLD: i32 = 40;
pub const INTEGRATION_PERCENT_THRESHOLD: i32 = 40;
pub const DIMENSIONAL_IMBALANCE_THRESHOLD: i32 = 15;
pub const NEGATIVE_ATTITUDE_THRESHOLD: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeIndices {
    /// DIF.
    pub total_deviation: Flagged<i32>,
    /// DIM.
    pub imbalance: i32,
    /// INT.
    pub integration_total: i32,
    pub distortion_count: Flagged<i32>,
    /// DIM%.
    pub imbalance_percent: Flagged<i32>,
    /// INT%.
    pub integration_percent: Flagged<i32>,
    pub q1: i32,
    pub q2: i32,
    /// D.I.
    pub dimensional_imbalance: Flagged<i32>,
    /// AI%.
    pub negative_attitude_percent: Flagged<i32>,
    pub positives_total: i32,
    pub negatives_total: i32,
}

/// `3 * max - sum`: zero when the three values are equal.
fn spread(values: [i32; 3]) -> i32 {
    let max = values.iter().copied().max().unwrap_or(0);
    3 * max - values.iter().sum::<i32>()
}

impl CompositeIndices {
    pub fn compute(
        dims: &DimensionMap<DimensionScores>,
        distortion_count: i32,
        policy: ZeroDenominatorPolicy,
    ) -> Result<Self, ScoringError> {
        let scores = [dims.intrinsic, dims.extrinsic, dims.systemic].map(|d| d.dimension_score.value);
        let integrations = [dims.intrinsic, dims.extrinsic, dims.systemic].map(|d| d.integration_score);

        let total: i32 = scores.iter().sum();
        let imbalance = spread(scores);
        let integration_total: i32 = integrations.iter().sum();
        let positives_total: i32 = dims.iter().map(|(_, d)| d.positives_count).sum();
        let negatives_total: i32 = dims.iter().map(|(_, d)| d.negatives_count).sum();

        let percent_of_total = |numerator: i32| {
            policy.resolve("total deviation", round_percent(numerator, total))
        };
        let imbalance_percent = percent_of_total(imbalance)?;
        let integration_percent = percent_of_total(integration_total)?;
        let negative_attitude_percent = percent_of_total(negatives_total)?;

        let q2 = imbalance + integration_total + distortion_count;
        let q1 = q2 + total;
        let dimensional_imbalance = spread(integrations);

        let flag_percent = |value: i32, threshold: i32| Flagged::when(value, |v| *v >= threshold);

        Ok(Self {
            total_deviation: Flagged::when(total, |t| *t >= TOTAL_DEVIATION_THRESHOLD),
            imbalance,
            integration_total,
            distortion_count: Flagged::when(distortion_count, |c| *c > 0),
            imbalance_percent: flag_percent(imbalance_percent, IMBALANCE_PERCENT_THRESHOLD),
            integration_percent: flag_percent(integration_percent, INTEGRATION_PERCENT_THRESHOLD),
            q1,
            q2,
            dimensional_imbalance: Flagged::when(dimensional_imbalance, |d| *d >= DIMENSIONAL_IMBALANCE_THRESHOLD),
            negative_attitude_percent: flag_percent(negative_attitude_percent, NEGATIVE_ATTITUDE_THRESHOLD),
            positives_total,
            negatives_total,
        })
    }
}
