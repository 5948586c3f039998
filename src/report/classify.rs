use serde_json::Value;

use crate::error::RowdiffError;
use crate::model::{DiffSchema, DiffSide};

/// The three buckets a wide diff row can land in. Every input row lands in
/// exactly one.
#[derive(Debug, Default)]
pub struct RowBuckets<'a> {
    pub left_only: Vec<&'a [Value]>,
    pub right_only: Vec<&'a [Value]>,
    pub matched: Vec<&'a [Value]>,
}

/// Partitions the engine's flat row sequence by exclusivity flags.
///
/// The engine contract says at most one flag is truthy per row. Should both
/// be set anyway, `is_exclusive_a` is checked first and the row lands in the
/// left bucket.
pub fn group_rows<'a>(
    schema: &DiffSchema,
    rows: &'a [Vec<Value>],
) -> Result<RowBuckets<'a>, RowdiffError> {
    let left_flag = schema.exclusive_flag_index(DiffSide::Left);
    let right_flag = schema.exclusive_flag_index(DiffSide::Right);

    let mut buckets = RowBuckets::default();
    for row in rows {
        schema.validate_row(row)?;

        if super::is_truthy(&row[left_flag]) {
            buckets.left_only.push(row);
        } else if super::is_truthy(&row[right_flag]) {
            buckets.right_only.push(row);
        } else {
            buckets.matched.push(row);
        }
    }

    log::debug!(
        "grouped {} rows: {} left only, {} right only, {} matched",
        rows.len(),
        buckets.left_only.len(),
        buckets.right_only.len(),
        buckets.matched.len()
    );

    Ok(buckets)
}
