use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RowdiffError;
use crate::view::{JsonColumnsSummary, JsonDiffSummary};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Identical,
    Different,
}

// Downcase the status
impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            DiffStatus::Identical => "identical",
            DiffStatus::Different => "different",
        };
        write!(f, "{}", status)
    }
}

/// Value of a single column in a row present in only one table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JsonExclusiveRowValue {
    #[serde(rename = "isPK")]
    pub is_pk: bool,
    pub value: Value,
}

/// Pair of values for one column of a row matched in both tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JsonDiffRowValue {
    pub table1: Value,
    pub table2: Value,
    #[serde(rename = "isDiff")]
    pub is_diff: bool,
    #[serde(rename = "isPK")]
    pub is_pk: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ExclusiveRowsDiff {
    pub table1: Vec<BTreeMap<String, JsonExclusiveRowValue>>,
    pub table2: Vec<BTreeMap<String, JsonExclusiveRowValue>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RowsDiff {
    pub exclusive: ExclusiveRowsDiff,
    pub diff: Vec<BTreeMap<String, JsonDiffRowValue>>,
}

/// The versioned document a comparison renders to.
///
/// This is the wire contract for downstream consumers, field names and
/// nesting cannot change within a `version`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JsonDiff {
    pub version: String,
    pub status: DiffStatus,
    pub model: String,
    pub table1: Vec<String>,
    pub table2: Vec<String>,
    pub rows: RowsDiff,
    pub summary: Option<JsonDiffSummary>,
    pub columns: Option<JsonColumnsSummary>,
}

impl JsonDiff {
    pub fn to_json(&self) -> Result<String, RowdiffError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::error::RowdiffError;
    use crate::view::json_diff::{DiffStatus, JsonDiffRowValue, JsonExclusiveRowValue};

    #[test]
    fn test_status_serializes_lowercase() -> Result<(), RowdiffError> {
        assert_eq!(serde_json::to_value(DiffStatus::Identical)?, json!("identical"));
        assert_eq!(serde_json::to_value(DiffStatus::Different)?, json!("different"));
        Ok(())
    }

    #[test]
    fn test_row_values_use_wire_field_names() -> Result<(), RowdiffError> {
        let value = JsonDiffRowValue {
            table1: json!("x"),
            table2: json!("y"),
            is_diff: true,
            is_pk: false,
        };
        assert_eq!(
            serde_json::to_value(&value)?,
            json!({ "table1": "x", "table2": "y", "isDiff": true, "isPK": false })
        );

        let mut row = BTreeMap::new();
        row.insert(
            "id".to_string(),
            JsonExclusiveRowValue {
                is_pk: true,
                value: json!(7),
            },
        );
        assert_eq!(
            serde_json::to_value(&row)?,
            json!({ "id": { "isPK": true, "value": 7 } })
        );
        Ok(())
    }
}
