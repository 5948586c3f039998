//! # rowdiff
//!
//! Converts the materialized result of a keyed two-table comparison into a
//! stable, versioned JSON document for reporting, UI rendering, and CI
//! gating. The comparison itself comes from an external diff engine; this
//! crate only consumes its wide-row output contract.
//!
//! # Examples
//!
//! ```
//! use rowdiff::model::TableDiff;
//! use rowdiff::opts::ReportOpts;
//! use rowdiff::report;
//! use rowdiff::view::DiffStatus;
//! use serde_json::json;
//!
//! let diff = TableDiff::new(
//!     vec![
//!         "id_a".to_string(),
//!         "id_b".to_string(),
//!         "is_exclusive_a".to_string(),
//!         "is_exclusive_b".to_string(),
//!     ],
//!     vec![vec![json!(1), json!(null), json!(true), json!(false)]],
//!     vec!["prod".to_string(), "orders".to_string()],
//!     vec!["dev".to_string(), "orders".to_string()],
//!     vec!["id".to_string()],
//! );
//!
//! let doc = report::json_diff(&diff, &ReportOpts::new("orders"))?;
//! assert_eq!(doc.status, DiffStatus::Different);
//! println!("{}", doc.to_json()?);
//! ```

pub mod constants;
pub mod error;
pub mod model;
pub mod opts;
pub mod report;
pub mod view;
