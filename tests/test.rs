// Catch all tests for the library

use serde_json::json;

use rowdiff::error::RowdiffError;
use rowdiff::model::{DiffStats, TableDiff};
use rowdiff::opts::ReportOpts;
use rowdiff::report;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn table_diff(schema: Vec<&str>, rows: Vec<Vec<serde_json::Value>>) -> TableDiff {
    TableDiff::new(
        schema.into_iter().map(String::from).collect(),
        rows,
        vec!["prod".to_string(), "orders".to_string()],
        vec!["dev".to_string(), "orders".to_string()],
        vec!["id".to_string()],
    )
}

#[test]
fn test_unknown_schema_field_aborts_assembly() {
    init();
    let diff = table_diff(
        vec!["id_a", "id_b", "rowcount", "is_exclusive_a", "is_exclusive_b"],
        vec![],
    );

    let result = report::json_diff(&diff, &ReportOpts::new("orders"));
    assert!(matches!(result, Err(RowdiffError::InvalidDiffField(_))));
}

#[test]
fn test_schema_without_exclusive_flags_aborts_assembly() {
    init();
    let diff = table_diff(vec!["id_a", "id_b"], vec![]);

    let result = report::json_diff(&diff, &ReportOpts::new("orders"));
    assert!(matches!(result, Err(RowdiffError::IncompleteDiffSchema(_))));
}

#[test]
fn test_short_row_aborts_assembly() {
    init();
    let diff = table_diff(
        vec!["id_a", "id_b", "is_exclusive_a", "is_exclusive_b"],
        vec![vec![json!(1), json!(1), json!(false)]],
    );

    let result = report::json_diff(&diff, &ReportOpts::new("orders"));
    assert!(matches!(result, Err(RowdiffError::RowSchemaMismatch(_))));
}

#[test]
fn test_half_populated_column_aborts_assembly() {
    init();
    // `name` only exists on the left side of the wide schema
    let diff = table_diff(
        vec!["id_a", "id_b", "name_a", "is_exclusive_a", "is_exclusive_b"],
        vec![vec![json!(1), json!(1), json!("x"), json!(false), json!(false)]],
    );

    let result = report::json_diff(&diff, &ReportOpts::new("orders"));
    assert!(matches!(result, Err(RowdiffError::IncompleteColumn(_))));
}

#[test]
fn test_stats_mapping_missing_keys_is_a_contract_violation() {
    init();
    let result = DiffStats::from_value(json!({ "rows_A": 10 }));
    assert!(matches!(result, Err(RowdiffError::JSON(_))));
}
