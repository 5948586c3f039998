pub mod columns_diff;
pub mod diff_field;
pub mod diff_schema;
pub mod diff_stats;
pub mod table_diff;

pub use crate::model::columns_diff::ColumnsDiff;

pub use crate::model::diff_field::{DiffField, DiffSide};
pub use crate::model::diff_schema::DiffSchema;

pub use crate::model::diff_stats::{DiffCounts, DiffStats};

pub use crate::model::table_diff::TableDiff;
