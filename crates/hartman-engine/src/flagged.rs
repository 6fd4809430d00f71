//! Values paired with their "remarkable" flag, plus the fixed-point decimal
//! used for world ratios.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed value and whether it crossed the threshold of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flagged<T> {
    pub value: T,
    pub remarked: bool,
}

impl<T> Flagged<T> {
    pub const fn new(value: T, remarked: bool) -> Self {
        Self { value, remarked }
    }

    /// Flag `value` when `rule` holds for it.
    pub fn when(value: T, rule: impl FnOnce(&T) -> bool) -> Self {
        let remarked = rule(&value);
        Self { value, remarked }
    }
}

/// Non-negative decimal with two fractional digits, stored as hundredths.
///
/// Serialized as a bare JSON number (`1.93`) for stable interchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hundredths(u64);

impl Hundredths {
    pub const ZERO: Hundredths = Hundredths(0);

    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// `ceil(numerator / denominator * 100) / 100`, or `None` for a zero
    /// denominator.
    pub fn ceil_ratio(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self((numerator * 100).div_ceil(denominator)))
    }

    pub const fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Hundredths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}
