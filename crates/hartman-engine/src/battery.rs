//! Whole-battery submissions.
//!
//! A battery is a flat list of ranks: External then Internal, optionally
//! followed by Sexual, 18 values each. Values past the last complete world
//! are ignored.

use crate::engine::{Engine, WorldScore};
use crate::error::{ResponseError, ScoringError};
use crate::mapper::map_alternate_responses;
use crate::relation::{FormulaWarnings, WorldRelation};
use crate::responses::Responses;
use hartman_axiology::valuation::dimension_score_valuation;
use hartman_axiology::{Dimension, World, ITEM_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encoding of submitted ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseFormat {
    /// Rank per questionnaire position.
    #[default]
    Standard,
    /// Quick-test codes, translated by [`map_alternate_responses`].
    QuickTest,
}

impl ResponseFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Standard => "standard",
            ResponseFormat::QuickTest => "quick-test",
        }
    }

    /// Validate (and for quick-test, translate) one world's ranks.
    pub fn read<T>(self, values: &[T]) -> Result<Responses, ResponseError>
    where
        T: Copy + Into<i64>,
    {
        match self {
            ResponseFormat::Standard => Responses::validate(values),
            ResponseFormat::QuickTest => map_alternate_responses(values),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response format `{0}` (expected standard or quick-test)")]
pub struct UnknownFormat(pub String);

impl FromStr for ResponseFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ResponseFormat::Standard),
            "quick-test" | "quick_test" | "quick" => Ok(ResponseFormat::QuickTest),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Per-world validated responses of one battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub external: Responses,
    pub internal: Responses,
    pub sexual: Option<Responses>,
}

fn read_world<T>(world: World, format: ResponseFormat, values: &[T]) -> Result<Responses, ScoringError>
where
    T: Copy + Into<i64>,
{
    format
        .read(values)
        .map_err(|source| ScoringError::World { world, source })
}

impl Submission {
    /// Split a flat list into worlds.
    ///
    /// The first 36 values are External then Internal. Sexual is read from
    /// values 36..54 when at least 54 are given; anything past the last read
    /// world is ignored.
    pub fn from_flat<T>(values: &[T], format: ResponseFormat) -> Result<Self, ScoringError>
    where
        T: Copy + Into<i64>,
    {
        if values.len() < 2 * ITEM_COUNT {
            return Err(ScoringError::BatteryShape { actual: values.len() });
        }

        let world_at = |world: World, slot: usize| -> Result<Responses, ScoringError> {
            read_world(world, format, &values[slot * ITEM_COUNT..(slot + 1) * ITEM_COUNT])
        };
        let external = world_at(World::External, 0)?;
        let internal = world_at(World::Internal, 1)?;
        let sexual = if values.len() >= 3 * ITEM_COUNT {
            Some(world_at(World::Sexual, 2)?)
        } else {
            None
        };

        let worlds = if sexual.is_some() { 3 } else { 2 };
        let read = worlds * ITEM_COUNT;
        if values.len() > read {
            tracing::warn!(received = values.len(), read, "ignoring trailing battery responses");
        }

        Ok(Self {
            external,
            internal,
            sexual,
        })
    }
}

/// Scores, relation and cross-check of a whole battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatteryScore {
    pub external: WorldScore,
    pub internal: WorldScore,
    pub sexual: Option<WorldScore>,
    pub relation: WorldRelation,
    pub formula_warnings: FormulaWarnings,
}

impl Engine {
    pub fn score_submission(&self, submission: &Submission) -> Result<BatteryScore, ScoringError> {
        let external = self.score(World::External, submission.external)?;
        let internal = self.score(World::Internal, submission.internal)?;
        let sexual = submission
            .sexual
            .map(|responses| self.score(World::Sexual, responses))
            .transpose()?;

        let relation = self.relate_worlds(&external, &internal)?;
        let formula_warnings = self.formula_warnings(&external, &internal, sexual.as_ref());

        tracing::debug!(
            worlds = if sexual.is_some() { 3 } else { 2 },
            warnings = ?formula_warnings.positions(),
            "scored battery"
        );

        Ok(BatteryScore {
            external,
            internal,
            sexual,
            relation,
            formula_warnings,
        })
    }

    /// Split, read, score and relate a flat battery.
    pub fn score_battery<T>(&self, values: &[T], format: ResponseFormat) -> Result<BatteryScore, ScoringError>
    where
        T: Copy + Into<i64>,
    {
        let submission = Submission::from_flat(values, format)?;
        self.score_submission(&submission)
    }

    /// Dimension-score valuations of a quick-test pair, ordered External
    /// I/E/S then Internal I/E/S.
    pub fn quick_test_explanations<T>(&self, external: &[T], internal: &[T]) -> Result<[&'static str; 6], ScoringError>
    where
        T: Copy + Into<i64>,
    {
        let external = read_world(World::External, ResponseFormat::QuickTest, external)?;
        let internal = read_world(World::Internal, ResponseFormat::QuickTest, internal)?;
        let external = self.score(World::External, external)?;
        let internal = self.score(World::Internal, internal)?;

        let valuation = |score: &WorldScore, dim: Dimension| {
            dimension_score_valuation(score.dimensions[dim].dimension_score.value)
        };
        let [i, e, s] = Dimension::ALL;
        Ok([
            valuation(&external, i),
            valuation(&external, e),
            valuation(&external, s),
            valuation(&internal, i),
            valuation(&internal, e),
            valuation(&internal, s),
        ])
    }
}
