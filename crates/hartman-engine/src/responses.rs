//! Response validation.
//!
//! A [`Responses`] value can only be obtained through [`Responses::validate`]
//! (or the quick-test mapper), so everything downstream may assume a
//! permutation of 1..=18.

use crate::error::ResponseError;
use hartman_axiology::ITEM_COUNT;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated ranking: the value at index `i` is the rank given to the item
/// at position `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Responses([u8; ITEM_COUNT]);

impl Responses {
    /// Check that `values` is a permutation of 1..=18.
    ///
    /// Checks run in order: length, range, repetition. Duplicated values are
    /// reported once each, ascending.
    pub fn validate<T>(values: &[T]) -> Result<Self, ResponseError>
    where
        T: Copy + Into<i64>,
    {
        if values.len() != ITEM_COUNT {
            return Err(ResponseError::InvalidShape {
                expected: ITEM_COUNT,
                actual: values.len(),
            });
        }

        let mut ranks = [0u8; ITEM_COUNT];
        for (index, value) in values.iter().enumerate() {
            let value: i64 = (*value).into();
            match u8::try_from(value) {
                Ok(rank @ 1..=18) => ranks[index] = rank,
                _ => return Err(ResponseError::InvalidValue { index, value }),
            }
        }

        let mut counts = [0u8; ITEM_COUNT + 1];
        for rank in ranks {
            counts[usize::from(rank)] += 1;
        }
        let duplicated: Vec<u8> = (1..=ITEM_COUNT as u8)
            .filter(|rank| counts[usize::from(*rank)] > 1)
            .collect();
        if !duplicated.is_empty() {
            return Err(ResponseError::Duplicate { values: duplicated });
        }

        Ok(Self(ranks))
    }

    /// Wrap an array already known to be a permutation.
    pub(crate) const fn from_permutation(ranks: [u8; ITEM_COUNT]) -> Self {
        Self(ranks)
    }

    pub const fn as_array(&self) -> &[u8; ITEM_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// 0-based index holding `rank`.
    pub fn index_of(&self, rank: u8) -> Option<usize> {
        self.0.iter().position(|&r| r == rank)
    }
}

impl TryFrom<&[i32]> for Responses {
    type Error = ResponseError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        Responses::validate(values)
    }
}

impl TryFrom<&[i64]> for Responses {
    type Error = ResponseError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Responses::validate(values)
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Responses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}
