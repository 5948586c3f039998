pub mod columns_summary;
pub mod diff_summary;
pub mod json_diff;

pub use crate::view::columns_summary::{ExclusiveColumns, JsonColumnsSummary};

pub use crate::view::diff_summary::{JsonDiffSummary, RowCounts, RowsSummary, SummaryStats};

pub use crate::view::json_diff::{
    DiffStatus, ExclusiveRowsDiff, JsonDiff, JsonDiffRowValue, JsonExclusiveRowValue, RowsDiff,
};
