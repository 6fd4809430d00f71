//! Reading ranks from arguments, files and stdin.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Parse comma- or whitespace-separated integers.
///
/// Range and permutation checks are left to the engine so that its error
/// messages reach the user unchanged.
pub fn parse_ranks(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("`{token}` is not an integer rank"))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatteryDocument {
    Wrapped { responses: Vec<i64> },
    Bare(Vec<i64>),
}

/// Parse a battery document: `{"responses": [...]}` or a bare array.
pub fn parse_battery(text: &str) -> Result<Vec<i64>> {
    let doc: BatteryDocument =
        serde_json::from_str(text).context("battery must be a JSON array or an object with `responses`")?;
    Ok(match doc {
        BatteryDocument::Wrapped { responses } => responses,
        BatteryDocument::Bare(responses) => responses,
    })
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
