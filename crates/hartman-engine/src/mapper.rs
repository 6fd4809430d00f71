//! Quick-test response format.
//!
//! The quick-test intake lists items in canonical-rank order rather than by
//! questionnaire position: entry `j` holds a code `k` (1..=18), and code `k`
//! stands for the item whose canonical value is `QUICK_TEST_CODES[k - 1]`.
//! Translating back means finding, for each standard position `i`, the entry
//! whose code names the item with canonical value `CANONICAL_RANKING[i]`, and
//! recording that entry's 1-based index as the rank.

use crate::error::ResponseError;
use crate::responses::Responses;
use hartman_axiology::{CANONICAL_RANKING, ITEM_COUNT};

/// Code → canonical value of the item it names, indexed by `code - 1`.
pub const QUICK_TEST_CODES: [u8; ITEM_COUNT] = [6, 9, 10, 11, 13, 5, 17, 16, 12, 4, 1, 18, 2, 14, 8, 15, 3, 7];

/// Translate quick-test responses into the standard format.
pub fn map_alternate_responses<T>(values: &[T]) -> Result<Responses, ResponseError>
where
    T: Copy + Into<i64>,
{
    let codes = Responses::validate(values)?;
    let codes = codes.as_array();

    let mut mapped = [0u8; ITEM_COUNT];
    for (slot, &canonical) in mapped.iter_mut().zip(CANONICAL_RANKING.iter()) {
        // `codes` is a permutation and the code table is a bijection onto
        // 1..=18, so exactly one entry matches.
        if let Some(j) = codes
            .iter()
            .position(|&code| QUICK_TEST_CODES[usize::from(code) - 1] == canonical)
        {
            *slot = (j + 1) as u8;
        }
    }

    Ok(Responses::from_permutation(mapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(values: [i32; 18]) -> Vec<u8> {
        map_alternate_responses(&values).expect("map").as_array().to_vec()
    }

    #[test]
    fn maps_external_quick_test_sample() {
        assert_eq!(
            mapped([13, 11, 1, 6, 10, 17, 2, 3, 5, 18, 15, 4, 14, 9, 16, 8, 12, 7]),
            [3, 7, 8, 12, 9, 4, 18, 16, 14, 5, 2, 17, 1, 13, 11, 15, 6, 10]
        );
    }

    #[test]
    fn maps_internal_quick_test_sample() {
        assert_eq!(
            mapped([2, 11, 17, 6, 1, 15, 10, 18, 13, 4, 5, 16, 3, 14, 9, 8, 7, 12]),
            [5, 1, 13, 10, 11, 4, 17, 16, 15, 7, 2, 18, 9, 14, 6, 12, 3, 8]
        );
    }

    #[test]
    fn identity_codes_map_to_identity() {
        let identity: [i32; 18] = std::array::from_fn(|i| i as i32 + 1);
        let expected: Vec<u8> = (1..=18).collect();
        assert_eq!(mapped(identity), expected);
    }

    #[test]
    fn rejects_malformed_input_before_mapping() {
        assert!(matches!(
            map_alternate_responses(&[1i32, 2, 3]),
            Err(ResponseError::InvalidShape { actual: 3, .. })
        ));
    }
}
