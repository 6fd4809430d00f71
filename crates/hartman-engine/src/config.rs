//! Engine configuration.

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a percentage, weight or ratio would divide by zero.
///
/// A perfectly matching ranking has a total deviation of 0, which makes every
/// test-wide percentage (and any world ratio using it) undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDenominatorPolicy {
    /// Define the quotient as 0, never remarkable.
    #[default]
    Zero,
    /// Fail with `ScoringError::ZeroDenominator`.
    Reject,
}

impl ZeroDenominatorPolicy {
    /// Resolve a quotient that is `None` because `quantity` was zero.
    pub(crate) fn resolve<T: Default>(
        self,
        quantity: &'static str,
        quotient: Option<T>,
    ) -> Result<T, ScoringError> {
        match (quotient, self) {
            (Some(value), _) => Ok(value),
            (None, ZeroDenominatorPolicy::Zero) => {
                tracing::debug!(quantity, "zero denominator resolved to 0");
                Ok(T::default())
            }
            (None, ZeroDenominatorPolicy::Reject) => {
                tracing::warn!(quantity, "zero denominator rejected");
                Err(ScoringError::ZeroDenominator { quantity })
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub zero_denominator: ZeroDenominatorPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineConfig {
    pub fn rejecting_zero_denominators() -> Self {
        Self {
            zero_denominator: ZeroDenominatorPolicy::Reject,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = EngineConfig::from_json_str("{}").expect("cfg");
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.zero_denominator, ZeroDenominatorPolicy::Zero);
    }

    #[test]
    fn parses_reject_policy() {
        let cfg = EngineConfig::from_json_str(r#"{ "zero_denominator": "reject" }"#).expect("cfg");
        assert_eq!(cfg, EngineConfig::rejecting_zero_denominators());
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(EngineConfig::from_json_str(r#"{ "zero_denominator": "nan" }"#).is_err());
        assert!(EngineConfig::from_json_str(r#"{ "rounding": "up" }"#).is_err());
    }
}
