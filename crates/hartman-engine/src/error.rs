use hartman_axiology::World;
use thiserror::Error;

/// A response array that is not a permutation of 1..=18.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("expected {expected} responses, got {actual}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("response {value} at position {} is outside 1..=18", .index + 1)]
    InvalidValue { index: usize, value: i64 },

    #[error("responses repeat the value(s) {}", join_values(.values))]
    Duplicate { values: Vec<u8> },
}

fn join_values(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("{world} world: {source}")]
    World {
        world: World,
        #[source]
        source: ResponseError,
    },

    #[error("a battery holds at least 36 responses, got {actual}")]
    BatteryShape { actual: usize },

    #[error("{quantity} is zero and the engine is configured to reject zero denominators")]
    ZeroDenominator { quantity: &'static str },
}
