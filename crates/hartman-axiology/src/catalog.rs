//! The axiogram catalog: 18 axiograms per world, loaded once and shared
//! read-only.
//!
//! The classification data (`BASE_AXIOGRAMS`) is compiled in. World-specific
//! phrasing is deployment data and is overlaid from a JSON document:
//!
//! ```json
//! {
//!   "external": [ { "position": 1, "phrase": "...", "excerpt": "...",
//!                   "explanation": "...", "plus": "...", "zero": "...", "minus": "..." } ],
//!   "internal": [],
//!   "sexual": []
//! }
//! ```
//!
//! Positions missing from the document keep empty text.

use crate::axiogram::{Axiogram, AxiogramText, BASE_AXIOGRAMS};
use crate::dimension::{Dimension, ITEM_COUNT};
use crate::world::World;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid axiogram text document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{world}: axiogram position {position} is outside 1..=18")]
    PositionOutOfRange { world: World, position: u8 },

    #[error("{world}: axiogram position {position} is listed more than once")]
    DuplicatePosition { world: World, position: u8 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TextsDocument {
    #[serde(default)]
    external: Vec<PositionedText>,
    #[serde(default)]
    internal: Vec<PositionedText>,
    #[serde(default)]
    sexual: Vec<PositionedText>,
}

#[derive(Debug, Deserialize)]
struct PositionedText {
    position: u8,
    #[serde(flatten)]
    text: AxiogramText,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    external: Vec<Arc<Axiogram>>,
    internal: Vec<Arc<Axiogram>>,
    sexual: Vec<Arc<Axiogram>>,
}

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Catalog {
    /// Catalog with compiled-in classification data and empty texts.
    pub fn builtin() -> Self {
        let world_set = |world: World| -> Vec<Arc<Axiogram>> {
            BASE_AXIOGRAMS
                .iter()
                .map(|base| {
                    Arc::new(Axiogram {
                        world,
                        base,
                        text: AxiogramText::default(),
                    })
                })
                .collect()
        };

        Self {
            external: world_set(World::External),
            internal: world_set(World::Internal),
            sexual: world_set(World::Sexual),
        }
    }

    /// Process-wide builtin catalog. Every call hands out the same allocation.
    pub fn shared() -> Arc<Catalog> {
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Catalog::builtin())))
    }

    pub fn from_texts_json(json: &str) -> Result<Self, CatalogError> {
        Self::builtin().with_texts_json(json)
    }

    /// Overlay world texts onto this catalog. Validation happens before any
    /// record is replaced.
    pub fn with_texts_json(mut self, json: &str) -> Result<Self, CatalogError> {
        let doc: TextsDocument = serde_json::from_str(json)?;

        for (world, entries) in [
            (World::External, &doc.external),
            (World::Internal, &doc.internal),
            (World::Sexual, &doc.sexual),
        ] {
            let mut seen = BTreeSet::new();
            for entry in entries {
                if entry.position == 0 || usize::from(entry.position) > ITEM_COUNT {
                    return Err(CatalogError::PositionOutOfRange {
                        world,
                        position: entry.position,
                    });
                }
                if !seen.insert(entry.position) {
                    return Err(CatalogError::DuplicatePosition {
                        world,
                        position: entry.position,
                    });
                }
            }
        }

        for (world, entries) in [
            (World::External, doc.external),
            (World::Internal, doc.internal),
            (World::Sexual, doc.sexual),
        ] {
            let slot = self.slot_mut(world);
            for entry in entries {
                let idx = usize::from(entry.position) - 1;
                slot[idx] = Arc::new(Axiogram {
                    world,
                    base: &BASE_AXIOGRAMS[idx],
                    text: entry.text,
                });
            }
        }

        Ok(self)
    }

    /// The 18 axiograms of a world, by position.
    pub fn axiograms(&self, world: World) -> &[Arc<Axiogram>] {
        match world {
            World::External => &self.external,
            World::Internal => &self.internal,
            World::Sexual => &self.sexual,
        }
    }

    /// Lookup by 1-based position.
    pub fn axiogram(&self, world: World, position: u8) -> Option<&Arc<Axiogram>> {
        usize::from(position)
            .checked_sub(1)
            .and_then(|idx| self.axiograms(world).get(idx))
    }

    pub fn by_canonical_value(&self, world: World, value: u8) -> Option<&Arc<Axiogram>> {
        self.axiograms(world)
            .iter()
            .find(|ax| ax.base.canonical_value == value)
    }

    pub fn by_dimension(&self, world: World, dimension: Dimension) -> impl Iterator<Item = &Arc<Axiogram>> {
        self.axiograms(world)
            .iter()
            .filter(move |ax| ax.base.dimension == dimension)
    }

    fn slot_mut(&mut self, world: World) -> &mut Vec<Arc<Axiogram>> {
        match world {
            World::External => &mut self.external,
            World::Internal => &mut self.internal,
            World::Sexual => &mut self.sexual,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
