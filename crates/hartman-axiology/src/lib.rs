//! Hartman axiology reference data
//!
//! Static, process-wide data shared by every scoring request:
//! - the three measurement [`Dimension`]s and their fixed cell layout,
//! - the three questionnaire [`World`]s and their dimension definitions,
//! - the [`CANONICAL_RANKING`] and the 18 [`AxiogramBase`] records,
//! - the [`Catalog`] of world-phrased [`Axiogram`]s,
//! - score-band lookup strings ([`valuation`]).
//!
//! Nothing here computes a score; see `hartman-engine`.

pub mod axiogram;
pub mod catalog;
pub mod dimension;
pub mod valuation;
pub mod world;

pub use axiogram::{Axiogram, AxiogramBase, AxiogramText, BASE_AXIOGRAMS, CANONICAL_RANKING, MIDPOINT};
pub use catalog::{Catalog, CatalogError};
pub use dimension::{Dimension, DimensionMap, CELLS_PER_DIMENSION, ITEM_COUNT};
pub use world::{UnknownWorld, World, WorldDefinition, WorldDimension};
