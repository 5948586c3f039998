use crate::model::{ColumnsDiff, DiffStats};

/// Options for rendering a table diff into the JSON document.
#[derive(Default, Clone, Debug)]
pub struct ReportOpts {
    /// Opaque identifier of the model or job the comparison belongs to.
    pub model: String,
    /// Row statistics from the engine, omitted from the document when None.
    pub summary: Option<DiffStats>,
    /// Schema changes from the engine, omitted from the document when None.
    pub columns: Option<ColumnsDiff>,
}

impl ReportOpts {
    pub fn new(model: impl AsRef<str>) -> ReportOpts {
        ReportOpts {
            model: model.as_ref().to_string(),
            summary: None,
            columns: None,
        }
    }
}
