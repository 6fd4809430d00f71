//! Human-readable rendering of a world score.

use colored::{ColoredString, Colorize};
use hartman_axiology::valuation::{
    dimension_score_valuation, imbalance_percent_valuation, negative_attitude_valuation, total_deviation_valuation,
};
use hartman_engine::{Flagged, WorldScore};
use std::fmt::Display;

fn mark<T: Display>(value: Flagged<T>) -> ColoredString {
    let text = value.value.to_string();
    if value.remarked {
        text.red().bold()
    } else {
        text.normal()
    }
}

pub fn print_world(score: &WorldScore) {
    let idx = &score.indices;
    println!("{} ({})", score.world.large_name().bold(), score.world);
    println!("  responses  {}", score.responses);
    println!();

    println!("  {:<8} {:>6} {:>6} {:>6}  valuation", "", "score", "int", "net");
    for (dim, d) in score.dimensions.iter() {
        println!(
            "  {:<8} {:>6} {:>6} {:>6}  {}",
            dim.short_name(),
            mark(d.dimension_score),
            d.integration_score,
            mark(d.positives_negatives_net),
            dimension_score_valuation(d.dimension_score.value)
        );
    }
    println!();

    println!(
        "  DIF  {:>4}  {}",
        mark(idx.total_deviation),
        total_deviation_valuation(idx.total_deviation.value)
    );
    println!(
        "  DIM% {:>4}  {}",
        mark(idx.imbalance_percent),
        imbalance_percent_valuation(idx.imbalance_percent.value)
    );
    println!("  INT% {:>4}", mark(idx.integration_percent));
    println!(
        "  AI%  {:>4}  {}",
        mark(idx.negative_attitude_percent),
        negative_attitude_valuation(idx.negative_attitude_percent.value)
    );
    println!("  D.I. {:>4}", mark(idx.dimensional_imbalance));
    println!("  DIS  {:>4}", mark(idx.distortion_count));
    println!("  Q1 {}  Q2 {}", idx.q1, idx.q2);

    let heaviest: Vec<String> = score
        .weighted
        .iter()
        .take_while(|item| item.weight_percent > 0)
        .take(5)
        .map(|item| format!("{}:{}%", item.axiogram.position(), item.weight_percent))
        .collect();
    if !heaviest.is_empty() {
        println!();
        println!("  heaviest  {}", heaviest.join("  "));
    }
}
