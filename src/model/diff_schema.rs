use serde_json::Value;

use crate::constants::{EXCLUSIVE_LEFT_FIELD, EXCLUSIVE_RIGHT_FIELD};
use crate::error::RowdiffError;
use crate::model::diff_field::{DiffField, DiffSide};

/// The diff engine's ordered field-name schema, decoded once per comparison.
///
/// Rows are positional, so after this parse every row can be processed by
/// zipping its values against `fields` without any further string matching.
#[derive(Debug, Clone)]
pub struct DiffSchema {
    fields: Vec<DiffField>,
    left_flag: usize,
    right_flag: usize,
}

impl DiffSchema {
    /// Fails on any field name that matches no known pattern, and on a
    /// schema that lacks either exclusivity flag column.
    pub fn parse(field_names: &[impl AsRef<str>]) -> Result<DiffSchema, RowdiffError> {
        let mut fields = Vec::with_capacity(field_names.len());
        let mut left_flag: Option<usize> = None;
        let mut right_flag: Option<usize> = None;

        for (i, name) in field_names.iter().enumerate() {
            let field = DiffField::parse(name.as_ref())?;
            match field {
                DiffField::Exclusive(DiffSide::Left) => left_flag = Some(i),
                DiffField::Exclusive(DiffSide::Right) => right_flag = Some(i),
                _ => {}
            }
            fields.push(field);
        }

        let left_flag =
            left_flag.ok_or_else(|| RowdiffError::incomplete_diff_schema(EXCLUSIVE_LEFT_FIELD))?;
        let right_flag = right_flag
            .ok_or_else(|| RowdiffError::incomplete_diff_schema(EXCLUSIVE_RIGHT_FIELD))?;

        Ok(DiffSchema {
            fields,
            left_flag,
            right_flag,
        })
    }

    pub fn fields(&self) -> &[DiffField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn exclusive_flag_index(&self, side: DiffSide) -> usize {
        match side {
            DiffSide::Left => self.left_flag,
            DiffSide::Right => self.right_flag,
        }
    }

    /// A row with the wrong field count violates the engine contract, never
    /// truncate or pad it into shape.
    pub fn validate_row(&self, row: &[Value]) -> Result<(), RowdiffError> {
        if row.len() != self.fields.len() {
            return Err(RowdiffError::row_schema_mismatch(self.fields.len(), row.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::RowdiffError;
    use crate::model::diff_field::{DiffField, DiffSide};
    use crate::model::diff_schema::DiffSchema;

    fn wide_schema() -> Vec<String> {
        vec![
            "id_a".to_string(),
            "id_b".to_string(),
            "is_diff_id".to_string(),
            "is_exclusive_a".to_string(),
            "is_exclusive_b".to_string(),
        ]
    }

    #[test]
    fn test_parse_keeps_field_order() -> Result<(), RowdiffError> {
        let schema = DiffSchema::parse(&wide_schema())?;
        assert_eq!(schema.len(), 5);
        assert_eq!(
            schema.fields()[0],
            DiffField::Value("id".to_string(), DiffSide::Left)
        );
        assert_eq!(schema.fields()[2], DiffField::Changed("id".to_string()));
        Ok(())
    }

    #[test]
    fn test_parse_locates_exclusive_flags() -> Result<(), RowdiffError> {
        let schema = DiffSchema::parse(&wide_schema())?;
        assert_eq!(schema.exclusive_flag_index(DiffSide::Left), 3);
        assert_eq!(schema.exclusive_flag_index(DiffSide::Right), 4);
        Ok(())
    }

    #[test]
    fn test_parse_requires_both_exclusive_flags() {
        let result = DiffSchema::parse(&["id_a", "id_b", "is_exclusive_a"]);
        assert!(matches!(result, Err(RowdiffError::IncompleteDiffSchema(_))));
    }

    #[test]
    fn test_validate_row_rejects_wrong_length() -> Result<(), RowdiffError> {
        let schema = DiffSchema::parse(&wide_schema())?;
        let row = vec![json!(1), json!(1)];
        let result = schema.validate_row(&row);
        assert!(matches!(result, Err(RowdiffError::RowSchemaMismatch(_))));
        Ok(())
    }
}
