//! Re-sorting and grouping of the 18 items for the two report views.
//!
//! Both views break ties by ascending position, i.e. original item order.

use crate::aggregate::DimensionScores;
use crate::diff::ItemCells;
use crate::flagged::Flagged;
use crate::percent::ceil_percent;
use hartman_axiology::{Axiogram, DimensionMap};
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;

/// `|diff| >= 2` is enough to be listed as noticeable.
pub const NOTICEABLE_ABS_DIFF: i32 = 2;

/// An item and its share of a deviation total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedItem {
    pub axiogram: Arc<Axiogram>,
    pub response: Flagged<i32>,
    pub diff: i32,
    pub is_distortion: bool,
    /// `ceil(|diff| / denominator * 100)`; 0 when the denominator is 0.
    pub weight_percent: i32,
}

/// An item that deviated enough to be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeableItem {
    pub axiogram: Arc<Axiogram>,
    pub response: i32,
    pub diff: i32,
    pub is_distortion: bool,
}

fn weighted_item(axiogram: &Arc<Axiogram>, cells: &ItemCells, denominator: i32) -> WeightedItem {
    let idx = axiogram.base.index();
    let diff = cells.diff(idx);
    WeightedItem {
        axiogram: Arc::clone(axiogram),
        response: cells.responses[idx],
        diff,
        is_distortion: cells.is_distortion(idx),
        weight_percent: ceil_percent(diff.abs(), denominator).unwrap_or(0),
    }
}

fn sort_by_weight(items: &mut [WeightedItem]) {
    items.sort_by_key(|item| (Reverse(item.weight_percent), item.axiogram.position()));
}

/// All 18 items weighted against the test-wide total deviation, heaviest first.
pub fn weighted_by_test(axiograms: &[Arc<Axiogram>], cells: &ItemCells, total_deviation: i32) -> Vec<WeightedItem> {
    let mut items: Vec<WeightedItem> = axiograms
        .iter()
        .map(|ax| weighted_item(ax, cells, total_deviation))
        .collect();
    sort_by_weight(&mut items);
    items
}

/// Items grouped by dimension, each weighted against its own dimension score.
pub fn weighted_by_dimension(
    axiograms: &[Arc<Axiogram>],
    cells: &ItemCells,
    dims: &DimensionMap<DimensionScores>,
) -> DimensionMap<Vec<WeightedItem>> {
    let mut grouped: DimensionMap<Vec<WeightedItem>> = DimensionMap::default();
    for ax in axiograms {
        let dim = ax.dimension();
        let denominator = dims[dim].dimension_score.value;
        grouped.get_mut(dim).push(weighted_item(ax, cells, denominator));
    }
    for dim in hartman_axiology::Dimension::ALL {
        sort_by_weight(grouped.get_mut(dim));
    }
    grouped
}

/// Items that are distortions, have a remarkable diff, or `|diff| >= 2`,
/// grouped by dimension and sorted by descending `|diff|`.
pub fn noticeable_by_dimension(axiograms: &[Arc<Axiogram>], cells: &ItemCells) -> DimensionMap<Vec<NoticeableItem>> {
    let mut grouped: DimensionMap<Vec<NoticeableItem>> = DimensionMap::default();
    for ax in axiograms {
        let idx = ax.base.index();
        let diff = cells.diffs[idx];
        let is_distortion = cells.is_distortion(idx);
        if !(is_distortion || diff.remarked || diff.value.abs() >= NOTICEABLE_ABS_DIFF) {
            continue;
        }
        grouped.get_mut(ax.dimension()).push(NoticeableItem {
            axiogram: Arc::clone(ax),
            response: cells.responses[idx].value,
            diff: diff.value,
            is_distortion,
        });
    }
    for dim in hartman_axiology::Dimension::ALL {
        grouped
            .get_mut(dim)
            .sort_by_key(|item| (Reverse(item.diff.abs()), item.axiogram.position()));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::responses::Responses;
    use hartman_axiology::{Catalog, Dimension, World};

    const EXTERNAL: [i32; 18] = [6, 5, 11, 12, 14, 3, 16, 15, 13, 7, 2, 18, 1, 10, 8, 17, 4, 9];

    fn cells(values: [i32; 18]) -> ItemCells {
        ItemCells::compute(&Responses::validate(&values).expect("valid"))
    }

    fn positions_and_weights(items: &[WeightedItem]) -> Vec<(u8, i32)> {
        items.iter().map(|i| (i.axiogram.position(), i.weight_percent)).collect()
    }

    #[test]
    fn test_weights_sort_descending_with_position_tie_break() {
        let c = cells(EXTERNAL);
        let items = weighted_by_test(Catalog::shared().axiograms(World::External), &c, 26);
        assert_eq!(items.len(), 18);
        assert_eq!(
            positions_and_weights(&items[..6]),
            [(2, 16), (14, 16), (10, 12), (6, 8), (16, 8), (18, 8)]
        );
        let zero_tail: Vec<u8> = items[15..].iter().map(|i| i.axiogram.position()).collect();
        assert_eq!(zero_tail, [1, 12, 15]);
    }

    #[test]
    fn dimension_weights_use_the_dimension_score() {
        let c = cells(EXTERNAL);
        let dims = aggregate(&c);
        let grouped = weighted_by_dimension(Catalog::shared().axiograms(World::External), &c, &dims);
        assert_eq!(
            positions_and_weights(&grouped[Dimension::Systemic]),
            [(2, 40), (18, 20), (3, 10), (8, 10), (9, 10), (17, 10)]
        );
        assert_eq!(
            positions_and_weights(&grouped[Dimension::Intrinsic]),
            [(14, 34), (10, 25), (6, 17), (16, 17), (11, 9), (12, 0)]
        );
        assert!(grouped.iter().all(|(_, items)| items.len() == 6));
    }

    #[test]
    fn zero_dimension_score_weights_are_zero() {
        // Only the systemic cells move: swap the ranks at positions 2 and 3 (9 <-> 10).
        let mut values = hartman_axiology::CANONICAL_RANKING.map(i32::from);
        values.swap(1, 2);
        let c = cells(values);
        let dims = aggregate(&c);
        let grouped = weighted_by_dimension(Catalog::shared().axiograms(World::Sexual), &c, &dims);
        assert!(grouped[Dimension::Intrinsic].iter().all(|i| i.weight_percent == 0));
        assert_eq!(grouped[Dimension::Systemic][0].weight_percent, 50);
    }

    #[test]
    fn noticeable_lists_only_deviating_items() {
        let c = cells(EXTERNAL);
        let grouped = noticeable_by_dimension(Catalog::shared().axiograms(World::External), &c);
        let view = |dim: Dimension| -> Vec<(u8, i32)> {
            grouped[dim].iter().map(|i| (i.axiogram.position(), i.diff)).collect()
        };
        assert_eq!(view(Dimension::Intrinsic), [(14, -4), (10, -3), (6, 2), (16, 2)]);
        assert!(view(Dimension::Extrinsic).is_empty());
        assert_eq!(view(Dimension::Systemic), [(2, 4), (18, -2)]);
    }

    #[test]
    fn distortion_alone_makes_an_item_noticeable() {
        let c = cells([13, 8, 9, 10, 14, 7, 16, 12, 11, 1, 2, 18, 3, 15, 6, 17, 4, 5]);
        let grouped = noticeable_by_dimension(Catalog::shared().axiograms(World::Sexual), &c);
        let c_item = grouped[Dimension::Systemic]
            .iter()
            .find(|i| i.axiogram.position() == 3)
            .expect("position 3 listed");
        assert_eq!(c_item.diff, -1);
        assert!(c_item.is_distortion);
    }

    #[test]
    fn remarkable_diff_alone_makes_an_item_noticeable() {
        // Swap the ranks 1 and 2: max |diff| is 1, so both moved items are remarkable.
        let mut values = hartman_axiology::CANONICAL_RANKING.map(i32::from);
        values.swap(10, 12);
        let c = cells(values);
        let grouped = noticeable_by_dimension(Catalog::shared().axiograms(World::Internal), &c);

        let intrinsic = &grouped[Dimension::Intrinsic];
        assert_eq!(intrinsic.len(), 1);
        assert_eq!((intrinsic[0].axiogram.position(), intrinsic[0].diff), (11, -1));
        assert!(!intrinsic[0].is_distortion);

        let extrinsic = &grouped[Dimension::Extrinsic];
        assert_eq!(extrinsic.len(), 1);
        assert_eq!((extrinsic[0].axiogram.position(), extrinsic[0].diff), (13, 1));
        assert!(grouped[Dimension::Systemic].is_empty());
    }
}
