use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RowdiffError;

/// Row statistics handed over by the diff engine's stats collaborator.
///
/// The external mapping uses `_A` / `_B` key spellings; the serde renames
/// pin that contract. A mapping missing any required key is a contract
/// violation and fails deserialization, extra keys are ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiffStats {
    #[serde(rename = "rows_A")]
    pub rows_left: usize,
    #[serde(rename = "rows_B")]
    pub rows_right: usize,
    #[serde(rename = "exclusive_A")]
    pub exclusive_left: usize,
    #[serde(rename = "exclusive_B")]
    pub exclusive_right: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub stats: DiffCounts,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiffCounts {
    pub diff_counts: BTreeMap<String, usize>,
}

impl DiffStats {
    pub fn from_value(value: serde_json::Value) -> Result<DiffStats, RowdiffError> {
        Ok(serde_json::from_value(value)?)
    }
}
