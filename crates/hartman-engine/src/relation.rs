//! Cross-world indices.

use crate::config::ZeroDenominatorPolicy;
use crate::engine::WorldScore;
use crate::error::ScoringError;
use crate::flagged::{Flagged, Hundredths};
use hartman_axiology::ITEM_COUNT;
use serde::Serialize;

/// Ratios at or above 2.49 are remarkable.
pub const RATIO_THRESHOLD: Hundredths = Hundredths::from_hundredths(249);

/// Relation between an External and an Internal world score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldRelation {
    /// `internal.q1 / external.q1`, ceiled to hundredths.
    pub ratio1: Flagged<Hundredths>,
    /// `internal.q2 / external.q2`, ceiled to hundredths.
    pub ratio2: Flagged<Hundredths>,
    /// `external.DIF / internal.DIF`, ceiled to hundredths.
    pub dif_ratio: Hundredths,
}

fn non_negative(value: i32) -> u64 {
    u64::from(value.max(0).unsigned_abs())
}

/// Relate two scored worlds. Not symmetric: swapping the arguments inverts
/// the ratios.
pub fn relate(
    external: &WorldScore,
    internal: &WorldScore,
    policy: ZeroDenominatorPolicy,
) -> Result<WorldRelation, ScoringError> {
    let ratio = |quantity: &'static str, numerator: i32, denominator: i32| {
        policy.resolve(
            quantity,
            Hundredths::ceil_ratio(non_negative(numerator), non_negative(denominator)),
        )
    };

    let ratio1 = ratio("external q1", internal.indices.q1, external.indices.q1)?;
    let ratio2 = ratio("external q2", internal.indices.q2, external.indices.q2)?;
    let dif_ratio = ratio(
        "internal total deviation",
        external.indices.total_deviation.value,
        internal.indices.total_deviation.value,
    )?;

    tracing::debug!(
        external = %external.world,
        internal = %internal.world,
        ratio1 = %ratio1,
        ratio2 = %ratio2,
        dif_ratio = %dif_ratio,
        "related worlds"
    );

    Ok(WorldRelation {
        ratio1: Flagged::when(ratio1, |r| *r >= RATIO_THRESHOLD),
        ratio2: Flagged::when(ratio2, |r| *r >= RATIO_THRESHOLD),
        dif_ratio,
    })
}

/// Positions flagged by the three-way deviation cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaWarnings {
    pub warnings: [bool; ITEM_COUNT],
}

impl FormulaWarnings {
    /// Flagged 1-based positions, ascending.
    pub fn positions(&self) -> Vec<u8> {
        (1..=ITEM_COUNT as u8)
            .filter(|pos| self.warnings[usize::from(*pos) - 1])
            .collect()
    }

    pub fn any(&self) -> bool {
        self.warnings.iter().any(|w| *w)
    }
}

/// Flag positions where several worlds deviate together.
///
/// Per position, with `e`, `i`, `s` the absolute diffs (`s = 0` without a
/// Sexual world):
/// - `s > 0`: flag when `e + i + s > 9` and at least two of the three are `>= 3`;
/// - otherwise: flag when `e + i > 6` and both are `>= 3`.
pub fn formula_warnings(
    external: &WorldScore,
    internal: &WorldScore,
    sexual: Option<&WorldScore>,
) -> FormulaWarnings {
    let warnings = std::array::from_fn(|pos| {
        let e = external.cells.diff(pos).abs();
        let i = internal.cells.diff(pos).abs();
        let s = sexual.map_or(0, |w| w.cells.diff(pos).abs());

        if s > 0 {
            let strong = [e, i, s].iter().filter(|d| **d >= 3).count();
            e + i + s > 9 && strong >= 2
        } else {
            e + i > 6 && e >= 3 && i >= 3
        }
    });
    FormulaWarnings { warnings }
}
