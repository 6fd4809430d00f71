//! Axiogram reference data: the canonical ranking and the 18 base records.

use crate::dimension::{Dimension, ITEM_COUNT};
use crate::world::World;
use serde::{Deserialize, Serialize};

/// The reference ranking every submission is compared against, by position.
///
/// Shared by all three worlds.
pub const CANONICAL_RANKING: [u8; ITEM_COUNT] = [6, 9, 10, 11, 13, 5, 17, 16, 12, 4, 1, 18, 2, 14, 8, 15, 3, 7];

/// Canonical values `<= MIDPOINT` sit on the "upper" half of the scale.
pub const MIDPOINT: u8 = 9;

/// World-independent classification of one questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxiogramBase {
    /// 1-based position in the questionnaire.
    pub position: u8,
    pub letter: &'static str,
    pub dimension: Dimension,
    /// Dimension whose scale the item is valued against.
    pub dimension_of_valuation: Dimension,
    pub is_devalued: bool,
    /// Canonical rank, equal to `CANONICAL_RANKING[position - 1]`.
    pub canonical_value: u8,
    pub plus_range_text: &'static str,
    pub minus_range_text: &'static str,
}

impl AxiogramBase {
    /// 0-based index into a response array.
    pub const fn index(&self) -> usize {
        self.position as usize - 1
    }
}

macro_rules! base {
    ($pos:literal, $letter:literal, $dim:ident, $val_dim:ident, $devalued:literal, $value:literal, $plus:literal, $minus:literal) => {
        AxiogramBase {
            position: $pos,
            letter: $letter,
            dimension: Dimension::$dim,
            dimension_of_valuation: Dimension::$val_dim,
            is_devalued: $devalued,
            canonical_value: $value,
            plus_range_text: $plus,
            minus_range_text: $minus,
        }
    };
}

pub static BASE_AXIOGRAMS: [AxiogramBase; ITEM_COUNT] = [
    base!(1, "A", Extrinsic, Extrinsic, false, 6, "1 a 5 (+5 a +1)", "7 a 18 (-1 a -12)"),
    base!(2, "B", Systemic, Systemic, false, 9, "1 a 8 (+8 a +1)", "10 a 18 (-1 a -9)"),
    base!(3, "C", Systemic, Systemic, true, 10, "11 a 18 (+1 a +8)", "1 a 9 ( -1 a -9)"),
    base!(4, "D", Extrinsic, Systemic, true, 11, "12 a 18 (+1 a +7)", "1 a 10 (-1 a  -10)"),
    base!(5, "E", Extrinsic, Extrinsic, true, 13, "14 a 18 (+1 a +5)", "1 a 12 (-12 a -1)"),
    base!(6, "F", Intrinsic, Systemic, false, 5, "1 a 4 (+1 a +3)", "6 a 18 (-1 a -13)"),
    base!(7, "G", Extrinsic, Intrinsic, true, 17, "18 (+1)", "1 a 16 (-16 a -1)"),
    base!(8, "H", Systemic, Intrinsic, true, 16, "17 a 18 (+1 a +2)", "1 a 15 (-15 a -1)"),
    base!(9, "I", Systemic, Extrinsic, true, 12, "13 a 18 (+1 a +6)", "1 a 11 (-11 a -1)"),
    base!(10, "J", Intrinsic, Extrinsic, false, 4, "1 a 3 (+3 a +1)", "5 a 18 (-1 a -14)"),
    base!(11, "K", Intrinsic, Intrinsic, false, 1, "n/a", "2 a 18 (-1 a -17)"),
    base!(12, "L", Intrinsic, Intrinsic, true, 18, "n/a", "1 a 17 (-17 a -1)"),
    base!(13, "M", Extrinsic, Intrinsic, false, 2, "1 (+1)", "3 a 18 (-1 a -16)"),
    base!(14, "N", Intrinsic, Systemic, true, 14, "15 a 18 (+1 a +4)", "1 a 13 (-13 a -1)"),
    base!(15, "O", Extrinsic, Systemic, false, 8, "1 a 7 (+7 a +1)", "9 a 18 (-1 a -10)"),
    base!(16, "P", Intrinsic, Extrinsic, true, 15, "16 a 18 (+1 a +3)", "1 a 14 (-14 a -1)"),
    base!(17, "Q", Systemic, Intrinsic, false, 3, "1 a 2 (+2 a +1)", "4 a 18 (-1 a -15)"),
    base!(18, "R", Systemic, Extrinsic, false, 7, "1 a 6 (+6 a +1)", "8 a 18 (-1 a -11)"),
];

/// World-specific presentation text of one axiogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxiogramText {
    pub phrase: String,
    pub excerpt: String,
    pub explanation: String,
    pub plus: String,
    pub zero: String,
    pub minus: String,
}

/// A base record as phrased inside one world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axiogram {
    pub world: World,
    pub base: &'static AxiogramBase,
    #[serde(flatten)]
    pub text: AxiogramText,
}

impl Axiogram {
    pub fn position(&self) -> u8 {
        self.base.position
    }

    pub fn dimension(&self) -> Dimension {
        self.base.dimension
    }
}
