//! Errors for the rowdiff library
//!
//! Enumeration for all errors that can occur while reshaping a diff
//!

use derive_more::{Display, Error};

use crate::model::DiffSide;

pub mod string_error;

pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum RowdiffError {
    // Wide schema decoding
    InvalidDiffField(StringError),
    IncompleteDiffSchema(StringError),

    // Rows
    RowSchemaMismatch(StringError),
    IncompleteColumn(StringError),

    // External Library Errors
    JSON(serde_json::Error),
    PolarsError(polars::prelude::PolarsError),
    Encoding(std::str::Utf8Error),

    // Fallback
    Basic(StringError),
}

impl RowdiffError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        RowdiffError::Basic(StringError::from(s.as_ref()))
    }

    pub fn invalid_diff_field(field: impl AsRef<str>) -> Self {
        RowdiffError::InvalidDiffField(StringError::from(format!(
            "field '{}' matches no known diff field pattern",
            field.as_ref()
        )))
    }

    pub fn incomplete_diff_schema(missing: impl AsRef<str>) -> Self {
        RowdiffError::IncompleteDiffSchema(StringError::from(format!(
            "diff schema is missing the '{}' column",
            missing.as_ref()
        )))
    }

    pub fn row_schema_mismatch(expected: usize, found: usize) -> Self {
        RowdiffError::RowSchemaMismatch(StringError::from(format!(
            "diff row has {} fields but the schema has {}",
            found, expected
        )))
    }

    pub fn incomplete_column(column: impl AsRef<str>, side: DiffSide) -> Self {
        RowdiffError::IncompleteColumn(StringError::from(format!(
            "column '{}' has no '{}' value in the matched row",
            column.as_ref(),
            side.value_suffix()
        )))
    }
}

impl From<serde_json::Error> for RowdiffError {
    fn from(error: serde_json::Error) -> Self {
        RowdiffError::JSON(error)
    }
}

impl From<polars::prelude::PolarsError> for RowdiffError {
    fn from(error: polars::prelude::PolarsError) -> Self {
        RowdiffError::PolarsError(error)
    }
}

impl From<std::str::Utf8Error> for RowdiffError {
    fn from(error: std::str::Utf8Error) -> Self {
        RowdiffError::Encoding(error)
    }
}
