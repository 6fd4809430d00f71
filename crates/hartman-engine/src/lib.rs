//! # Hartman scoring engine
//!
//! Scores an 18-item forced ranking against the canonical ranking, for each
//! of the three worlds, and relates the External and Internal results.
//!
//! ```
//! use hartman_engine::{score_world, relate_worlds};
//! use hartman_axiology::World;
//!
//! let external = score_world(World::External, &[6, 5, 11, 12, 14, 3, 16, 15, 13, 7, 2, 18, 1, 10, 8, 17, 4, 9]).unwrap();
//! let internal = score_world(World::Internal, &[6, 1, 15, 12, 10, 3, 13, 16, 14, 8, 4, 17, 9, 18, 5, 11, 2, 7]).unwrap();
//! assert_eq!(external.indices.q1, 41);
//! assert_eq!(relate_worlds(&external, &internal).unwrap().ratio1.value.to_string(), "1.93");
//! ```
//!
//! All computations are pure and integer-valued; the only shared state is
//! the read-only [`hartman_axiology::Catalog`].

pub mod aggregate;
pub mod battery;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod flagged;
pub mod indices;
pub mod mapper;
pub mod percent;
pub mod ranker;
pub mod relation;
pub mod responses;

pub use aggregate::{aggregate, DimensionScores};
pub use battery::{BatteryScore, ResponseFormat, Submission, UnknownFormat};
pub use config::{ConfigError, EngineConfig, ZeroDenominatorPolicy};
pub use diff::ItemCells;
pub use engine::{relate_worlds, score_world, Engine, WorldScore};
pub use error::{ResponseError, ScoringError};
pub use flagged::{Flagged, Hundredths};
pub use indices::CompositeIndices;
pub use mapper::map_alternate_responses;
pub use ranker::{NoticeableItem, WeightedItem};
pub use relation::{formula_warnings, FormulaWarnings, WorldRelation};
pub use responses::Responses;
