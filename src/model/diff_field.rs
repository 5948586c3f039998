use crate::constants::{
    CHANGED_FLAG_PREFIX, EXCLUSIVE_LEFT_FIELD, EXCLUSIVE_RIGHT_FIELD, LEFT_VALUE_SUFFIX,
    RIGHT_VALUE_SUFFIX,
};
use crate::error::RowdiffError;

/// Which of the two compared tables a field belongs to.
///
/// `Left` is table1 (the `_a` side), `Right` is table2 (the `_b` side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffSide {
    Left,
    Right,
}

impl DiffSide {
    pub fn value_suffix(&self) -> &'static str {
        match self {
            DiffSide::Left => LEFT_VALUE_SUFFIX,
            DiffSide::Right => RIGHT_VALUE_SUFFIX,
        }
    }
}

/// One field of the wide row schema the diff engine emits.
///
/// The engine encodes everything positionally with suffixed field names:
/// `<col>_a` and `<col>_b` carry the two tables' values, `is_diff_<col>`
/// flags a changed column, and `is_exclusive_a` / `is_exclusive_b` mark rows
/// present in only one table. This enum is the single place those patterns
/// are enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffField {
    /// `is_exclusive_a` / `is_exclusive_b`
    Exclusive(DiffSide),
    /// `is_diff_<column>`
    Changed(String),
    /// `<column>_a` / `<column>_b`
    Value(String, DiffSide),
}

impl DiffField {
    /// The exclusivity flags end in `_a` / `_b` themselves and the changed
    /// flag prefix can swallow a value suffix, so match order matters here.
    pub fn parse(name: &str) -> Result<DiffField, RowdiffError> {
        if name == EXCLUSIVE_LEFT_FIELD {
            return Ok(DiffField::Exclusive(DiffSide::Left));
        }

        if name == EXCLUSIVE_RIGHT_FIELD {
            return Ok(DiffField::Exclusive(DiffSide::Right));
        }

        if let Some(column) = name.strip_prefix(CHANGED_FLAG_PREFIX) {
            return Ok(DiffField::Changed(column.to_string()));
        }

        if let Some(column) = name.strip_suffix(LEFT_VALUE_SUFFIX) {
            return Ok(DiffField::Value(column.to_string(), DiffSide::Left));
        }

        if let Some(column) = name.strip_suffix(RIGHT_VALUE_SUFFIX) {
            return Ok(DiffField::Value(column.to_string(), DiffSide::Right));
        }

        Err(RowdiffError::invalid_diff_field(name))
    }
}
