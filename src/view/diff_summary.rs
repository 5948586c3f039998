use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::DiffStats;

/// Per-table pair of row counts.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts {
    pub table1: usize,
    pub table2: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RowsSummary {
    pub total: RowCounts,
    pub exclusive: RowCounts,
    pub updated: usize,
    pub unchanged: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryStats {
    #[serde(rename = "diffCounts")]
    pub diff_counts: BTreeMap<String, usize>,
}

/// Row statistics section of the diff document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonDiffSummary {
    pub rows: RowsSummary,
    pub stats: SummaryStats,
}

impl From<&DiffStats> for JsonDiffSummary {
    fn from(stats: &DiffStats) -> JsonDiffSummary {
        JsonDiffSummary {
            rows: RowsSummary {
                total: RowCounts {
                    table1: stats.rows_left,
                    table2: stats.rows_right,
                },
                exclusive: RowCounts {
                    table1: stats.exclusive_left,
                    table2: stats.exclusive_right,
                },
                updated: stats.updated,
                unchanged: stats.unchanged,
            },
            stats: SummaryStats {
                diff_counts: stats.stats.diff_counts.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::RowdiffError;
    use crate::model::DiffStats;
    use crate::view::diff_summary::JsonDiffSummary;

    #[test]
    fn test_summary_remap_shape() -> Result<(), RowdiffError> {
        let stats = DiffStats::from_value(json!({
            "rows_A": 10,
            "rows_B": 12,
            "exclusive_A": 1,
            "exclusive_B": 3,
            "updated": 2,
            "unchanged": 7,
            "stats": { "diff_counts": { "name": 2 } },
        }))?;

        let summary = JsonDiffSummary::from(&stats);
        assert_eq!(
            serde_json::to_value(&summary)?,
            json!({
                "rows": {
                    "total": { "table1": 10, "table2": 12 },
                    "exclusive": { "table1": 1, "table2": 3 },
                    "updated": 2,
                    "unchanged": 7,
                },
                "stats": { "diffCounts": { "name": 2 } },
            })
        );
        Ok(())
    }
}
