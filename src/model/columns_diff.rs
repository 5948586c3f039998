use serde::{Deserialize, Serialize};

use crate::error::RowdiffError;

/// Column-level changes between the two table schemas, as reported by the
/// external schema-diff collaborator. Every key is optional, a missing key
/// means no columns of that kind.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ColumnsDiff {
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub changed: Vec<String>,
}

impl ColumnsDiff {
    pub fn from_value(value: serde_json::Value) -> Result<ColumnsDiff, RowdiffError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
