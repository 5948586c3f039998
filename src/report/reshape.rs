use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use crate::error::RowdiffError;
use crate::model::{DiffField, DiffSchema, DiffSide};
use crate::view::{JsonDiffRowValue, JsonExclusiveRowValue};

#[derive(Default)]
struct PartialColumn {
    left: Option<Value>,
    right: Option<Value>,
    changed: Option<bool>,
}

/// Reshapes a matched wide row into a per-column mapping.
///
/// Accumulates the three field kinds per column, then finalizes. The wide
/// schema always emits `_a` and `_b` for every compared column, so a column
/// missing a side value after the scan is an engine contract violation. A
/// missing `is_diff_<col>` flag finalizes as false.
pub fn matched_row(
    schema: &DiffSchema,
    row: &[Value],
    key_columns: &HashSet<String>,
) -> Result<BTreeMap<String, JsonDiffRowValue>, RowdiffError> {
    let mut columns: BTreeMap<String, PartialColumn> = BTreeMap::new();

    for (field, value) in schema.fields().iter().zip(row) {
        match field {
            DiffField::Exclusive(_) => {}
            DiffField::Changed(column) => {
                columns.entry(column.clone()).or_default().changed = Some(super::is_truthy(value));
            }
            DiffField::Value(column, DiffSide::Left) => {
                columns.entry(column.clone()).or_default().left = Some(value.clone());
            }
            DiffField::Value(column, DiffSide::Right) => {
                columns.entry(column.clone()).or_default().right = Some(value.clone());
            }
        }
    }

    let mut reshaped = BTreeMap::new();
    for (column, partial) in columns {
        let table1 = partial
            .left
            .ok_or_else(|| RowdiffError::incomplete_column(&column, DiffSide::Left))?;
        let table2 = partial
            .right
            .ok_or_else(|| RowdiffError::incomplete_column(&column, DiffSide::Right))?;
        let is_pk = key_columns.contains(&column);
        reshaped.insert(
            column,
            JsonDiffRowValue {
                table1,
                table2,
                is_diff: partial.changed.unwrap_or(false),
                is_pk,
            },
        );
    }

    Ok(reshaped)
}

/// Reshapes an exclusive wide row, surfacing only the side the row exists
/// on. The non-existing side's fields and all `is_diff_*` flags are noise
/// for a row with no counterpart.
pub fn exclusive_row(
    schema: &DiffSchema,
    row: &[Value],
    key_columns: &HashSet<String>,
    side: DiffSide,
) -> BTreeMap<String, JsonExclusiveRowValue> {
    let mut reshaped = BTreeMap::new();

    for (field, value) in schema.fields().iter().zip(row) {
        if let DiffField::Value(column, value_side) = field {
            if *value_side == side {
                reshaped.insert(
                    column.clone(),
                    JsonExclusiveRowValue {
                        is_pk: key_columns.contains(column),
                        value: value.clone(),
                    },
                );
            }
        }
    }

    reshaped
}
