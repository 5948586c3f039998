use serde::{Deserialize, Serialize};

use crate::model::ColumnsDiff;

/// Column names present in only one of the two tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveColumns {
    pub table1: Vec<String>,
    pub table2: Vec<String>,
}

/// Schema-change section of the diff document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonColumnsSummary {
    pub exclusive: ExclusiveColumns,
    #[serde(rename = "typeChanged")]
    pub type_changed: Vec<String>,
}

impl From<&ColumnsDiff> for JsonColumnsSummary {
    fn from(columns: &ColumnsDiff) -> JsonColumnsSummary {
        JsonColumnsSummary {
            exclusive: ExclusiveColumns {
                // A removed column exists only in table1, an added one only
                // in table2.
                table1: columns.removed.clone(),
                table2: columns.added.clone(),
            },
            type_changed: columns.changed.clone(),
        }
    }
}
