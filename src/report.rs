//! Renders a materialized table diff into the versioned `JsonDiff` document.

use std::collections::HashSet;

use serde_json::Value;

use crate::constants::JSON_DIFF_VERSION;
use crate::error::RowdiffError;
use crate::model::{DiffSchema, DiffSide, TableDiff};
use crate::opts::ReportOpts;
use crate::view::{
    DiffStatus, ExclusiveRowsDiff, JsonColumnsSummary, JsonDiff, JsonDiffSummary, RowsDiff,
};

pub mod classify;
pub mod reshape;

/// Builds the complete document for one comparison.
///
/// All-or-nothing: any contract violation in a sub-step aborts the whole
/// assembly, a partial document is never returned.
pub fn json_diff(diff: &TableDiff, opts: &ReportOpts) -> Result<JsonDiff, RowdiffError> {
    let schema = DiffSchema::parse(&diff.schema)?;
    let key_columns: HashSet<String> = diff.key_columns.iter().cloned().collect();

    let buckets = classify::group_rows(&schema, &diff.rows)?;

    let mut diff_rows = Vec::with_capacity(buckets.matched.len());
    for row in &buckets.matched {
        diff_rows.push(reshape::matched_row(&schema, row, &key_columns)?);
    }

    let mut left_rows = Vec::with_capacity(buckets.left_only.len());
    for row in &buckets.left_only {
        left_rows.push(reshape::exclusive_row(&schema, row, &key_columns, DiffSide::Left));
    }

    let mut right_rows = Vec::with_capacity(buckets.right_only.len());
    for row in &buckets.right_only {
        right_rows.push(reshape::exclusive_row(&schema, row, &key_columns, DiffSide::Right));
    }

    let summary = opts.summary.as_ref().map(JsonDiffSummary::from);
    let columns = opts.columns.as_ref().map(JsonColumnsSummary::from);

    let columns_changed = opts
        .columns
        .as_ref()
        .map(|columns| !columns.is_empty())
        .unwrap_or(false);
    let status = if !left_rows.is_empty()
        || !right_rows.is_empty()
        || !diff_rows.is_empty()
        || columns_changed
    {
        DiffStatus::Different
    } else {
        DiffStatus::Identical
    };

    Ok(JsonDiff {
        version: JSON_DIFF_VERSION.to_string(),
        status,
        model: opts.model.clone(),
        table1: diff.table1.clone(),
        table2: diff.table2.clone(),
        rows: RowsDiff {
            exclusive: ExclusiveRowsDiff {
                table1: left_rows,
                table2: right_rows,
            },
            diff: diff_rows,
        },
        summary,
        columns,
    })
}

/// JSON truthiness for the engine's flag cells: null, false, zero, and
/// empty strings/containers are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::report::is_truthy;

    #[test]
    fn test_is_truthy_json_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("t")));
    }
}
