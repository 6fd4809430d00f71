//! The three measurement dimensions and the fixed cell layout that maps the 18
//! questionnaire positions onto them.
//!
//! Every position belongs to exactly one dimension:
//!
//! ```text
//! I (intrinsic)  5  9 10 11 13 15
//! E (extrinsic)  0  3  4  6 12 14
//! S (systemic)   1  2  7  8 16 17
//! ```
//!
//! Positions are 0-based indexes into a response array.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items in one world of the questionnaire.
pub const ITEM_COUNT: usize = 18;

/// Number of items owned by each dimension.
pub const CELLS_PER_DIMENSION: usize = 6;

const INTRINSIC_CELLS: [usize; CELLS_PER_DIMENSION] = [5, 9, 10, 11, 13, 15];
const EXTRINSIC_CELLS: [usize; CELLS_PER_DIMENSION] = [0, 3, 4, 6, 12, 14];
const SYSTEMIC_CELLS: [usize; CELLS_PER_DIMENSION] = [1, 2, 7, 8, 16, 17];

/// A measurement axis of the axiological profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Intrinsic,
    Extrinsic,
    Systemic,
}

impl Dimension {
    /// All dimensions in report order (I, E, S).
    pub const ALL: [Dimension; 3] = [Dimension::Intrinsic, Dimension::Extrinsic, Dimension::Systemic];

    /// The six 0-based positions owned by this dimension, ascending.
    pub const fn cell_positions(self) -> &'static [usize; CELLS_PER_DIMENSION] {
        match self {
            Dimension::Intrinsic => &INTRINSIC_CELLS,
            Dimension::Extrinsic => &EXTRINSIC_CELLS,
            Dimension::Systemic => &SYSTEMIC_CELLS,
        }
    }

    /// Dimension owning a 0-based position, or `None` when `position >= 18`.
    pub fn of_position(position: usize) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|dim| dim.cell_positions().contains(&position))
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Dimension::Intrinsic => "I",
            Dimension::Extrinsic => "E",
            Dimension::Systemic => "S",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Dimension::Intrinsic => "DIM-I",
            Dimension::Extrinsic => "DIM-E",
            Dimension::Systemic => "DIM-S",
        }
    }

    pub const fn large_name(self) -> &'static str {
        match self {
            Dimension::Intrinsic => "Dimensión Intrínseca",
            Dimension::Extrinsic => "Dimensión Extrínseca",
            Dimension::Systemic => "Dimensión Sistémica",
        }
    }

    /// Adjective form used in report prose.
    pub const fn translated_name(self) -> &'static str {
        match self {
            Dimension::Intrinsic => "Intrínseco",
            Dimension::Extrinsic => "Extrínseco",
            Dimension::Systemic => "Sistémico",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// One value per dimension.
///
/// Built once through [`DimensionMap::from_fn`] (or by filling a mutable map
/// during a single pass) and then handed out read-only; lookups are total, so
/// there is no "missing dimension" case for callers to handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionMap<T> {
    pub intrinsic: T,
    pub extrinsic: T,
    pub systemic: T,
}

impl<T> DimensionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            intrinsic: f(Dimension::Intrinsic),
            extrinsic: f(Dimension::Extrinsic),
            systemic: f(Dimension::Systemic),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::Intrinsic => &self.intrinsic,
            Dimension::Extrinsic => &self.extrinsic,
            Dimension::Systemic => &self.systemic,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::Intrinsic => &mut self.intrinsic,
            Dimension::Extrinsic => &mut self.extrinsic,
            Dimension::Systemic => &mut self.systemic,
        }
    }

    /// Iterate in report order (I, E, S).
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().map(move |dim| (dim, self.get(dim)))
    }
}

impl<T> std::ops::Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        self.get(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_layout_covers_every_position_once() {
        let mut seen = [0u8; ITEM_COUNT];
        for dim in Dimension::ALL {
            for &pos in dim.cell_positions() {
                seen[pos] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "seen={seen:?}");
    }

    #[test]
    fn of_position_agrees_with_cell_layout() {
        for dim in Dimension::ALL {
            for &pos in dim.cell_positions() {
                assert_eq!(Dimension::of_position(pos), Some(dim));
            }
        }
        assert_eq!(Dimension::of_position(ITEM_COUNT), None);
    }

    #[test]
    fn dimension_map_indexes_by_variant() {
        let map = DimensionMap::from_fn(|d| d.letter().to_string());
        assert_eq!(map[Dimension::Extrinsic], "E");
        let letters: Vec<_> = map.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(letters, ["I", "E", "S"]);
    }
}
