//! Scoring entry points.
//!
//! ```text
//! raw ranks ──validate──▶ Responses ──▶ ItemCells ──▶ DimensionMap<DimensionScores>
//!                                          │                    │
//!                                          │                    ▼
//!                                          │            CompositeIndices
//!                                          ▼                    │
//!                                   ranked item views ◀─────────┘
//! ```
//!
//! An [`Engine`] pairs a read-only [`Catalog`] with an [`EngineConfig`]. It
//! holds no mutable state, so one engine can serve any number of threads.

use crate::aggregate::{aggregate, DimensionScores};
use crate::config::EngineConfig;
use crate::diff::ItemCells;
use crate::error::ScoringError;
use crate::flagged::Flagged;
use crate::indices::CompositeIndices;
use crate::ranker::{self, NoticeableItem, WeightedItem};
use crate::relation::{self, FormulaWarnings, WorldRelation};
use crate::responses::Responses;
use hartman_axiology::{Catalog, DimensionMap, World, ITEM_COUNT};
use serde::Serialize;
use std::sync::{Arc, OnceLock};

/// Everything computed for one world of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldScore {
    pub world: World,
    pub responses: Responses,
    pub cells: ItemCells,
    pub dimensions: DimensionMap<DimensionScores>,
    pub indices: CompositeIndices,
    /// All items weighted against the total deviation.
    pub weighted: Vec<WeightedItem>,
    pub weighted_by_dimension: DimensionMap<Vec<WeightedItem>>,
    pub noticeable_by_dimension: DimensionMap<Vec<NoticeableItem>>,
}

impl WorldScore {
    /// Annotated response at 0-based `index` (remarked = distortion).
    pub fn response(&self, index: usize) -> Option<Flagged<i32>> {
        self.cells.responses.get(index).copied()
    }

    /// Annotated diff at 0-based `index` (remarked = diff-remarkable).
    pub fn diff(&self, index: usize) -> Option<Flagged<i32>> {
        self.cells.diffs.get(index).copied()
    }

    pub fn diffs(&self) -> [i32; ITEM_COUNT] {
        self.cells.diffs.map(|d| d.value)
    }

    pub fn total_deviation(&self) -> i32 {
        self.indices.total_deviation.value
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the builtin catalog.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(Catalog::shared(), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `values` and score them as `world`.
    pub fn score_world<T>(&self, world: World, values: &[T]) -> Result<WorldScore, ScoringError>
    where
        T: Copy + Into<i64>,
    {
        let responses = Responses::validate(values)?;
        self.score(world, responses)
    }

    /// Score an already validated ranking.
    pub fn score(&self, world: World, responses: Responses) -> Result<WorldScore, ScoringError> {
        let cells = ItemCells::compute(&responses);
        let dimensions = aggregate(&cells);
        let indices = CompositeIndices::compute(&dimensions, cells.distortion_count(), self.config.zero_denominator)?;

        let axiograms = self.catalog.axiograms(world);
        let weighted = ranker::weighted_by_test(axiograms, &cells, indices.total_deviation.value);
        let weighted_by_dimension = ranker::weighted_by_dimension(axiograms, &cells, &dimensions);
        let noticeable_by_dimension = ranker::noticeable_by_dimension(axiograms, &cells);

        tracing::debug!(
            world = %world,
            responses = %responses,
            total_deviation = indices.total_deviation.value,
            distortions = indices.distortion_count.value,
            q1 = indices.q1,
            q2 = indices.q2,
            "scored world"
        );

        Ok(WorldScore {
            world,
            responses,
            cells,
            dimensions,
            indices,
            weighted,
            weighted_by_dimension,
            noticeable_by_dimension,
        })
    }

    pub fn relate_worlds(&self, external: &WorldScore, internal: &WorldScore) -> Result<WorldRelation, ScoringError> {
        relation::relate(external, internal, self.config.zero_denominator)
    }

    pub fn formula_warnings(
        &self,
        external: &WorldScore,
        internal: &WorldScore,
        sexual: Option<&WorldScore>,
    ) -> FormulaWarnings {
        relation::formula_warnings(external, internal, sexual)
    }
}

fn default_engine() -> &'static Engine {
    static DEFAULT: OnceLock<Engine> = OnceLock::new();
    DEFAULT.get_or_init(Engine::default)
}

/// Score `values` as `world` with the builtin catalog and default config.
pub fn score_world<T>(world: World, values: &[T]) -> Result<WorldScore, ScoringError>
where
    T: Copy + Into<i64>,
{
    default_engine().score_world(world, values)
}

/// Relate two world scores with the default config.
pub fn relate_worlds(external: &WorldScore, internal: &WorldScore) -> Result<WorldRelation, ScoringError> {
    default_engine().relate_worlds(external, internal)
}
