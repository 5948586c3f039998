use std::io::BufWriter;
use std::str;

use polars::prelude::*;
use serde_json::Value;

use crate::error::RowdiffError;

/// Materialized output of the external diff engine for one comparison.
///
/// `schema` names the wide row fields positionally, `rows` are the engine's
/// diff rows aligned to it. The engine guarantees the same key-column set on
/// both tables.
#[derive(Debug, Clone)]
pub struct TableDiff {
    pub schema: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub table1: Vec<String>,
    pub table2: Vec<String>,
    pub key_columns: Vec<String>,
}

impl TableDiff {
    pub fn new(
        schema: Vec<String>,
        rows: Vec<Vec<Value>>,
        table1: Vec<String>,
        table2: Vec<String>,
        key_columns: Vec<String>,
    ) -> TableDiff {
        TableDiff {
            schema,
            rows,
            table1,
            table2,
            key_columns,
        }
    }

    /// Ingest a wide diff frame the engine materialized as a DataFrame.
    pub fn from_df(
        df: &mut DataFrame,
        table1: Vec<String>,
        table2: Vec<String>,
        key_columns: Vec<String>,
    ) -> Result<TableDiff, RowdiffError> {
        let schema: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let rows = TableDiff::json_rows(df, &schema)?;

        Ok(TableDiff {
            schema,
            rows,
            table1,
            table2,
            key_columns,
        })
    }

    fn json_rows(df: &mut DataFrame, schema: &[String]) -> Result<Vec<Vec<Value>>, RowdiffError> {
        log::debug!("Serializing diff frame: [{}]", df);

        let data: Vec<u8> = Vec::new();
        let mut buf = BufWriter::new(data);

        let mut writer = JsonWriter::new(&mut buf).with_json_format(JsonFormat::Json);
        writer.finish(df)?;

        let buffer = buf
            .into_inner()
            .map_err(|e| RowdiffError::basic_str(format!("Could not get json buffer: {}", e)))?;
        let json_str = str::from_utf8(&buffer)?;
        let parsed: Value = serde_json::from_str(json_str)?;

        let objects = match parsed {
            Value::Array(objects) => objects,
            _ => {
                return Err(RowdiffError::basic_str(
                    "diff frame did not serialize to a JSON array of rows",
                ))
            }
        };

        let mut rows = Vec::with_capacity(objects.len());
        for object in objects {
            let mut fields = match object {
                Value::Object(fields) => fields,
                _ => {
                    return Err(RowdiffError::basic_str(
                        "diff frame row did not serialize to a JSON object",
                    ))
                }
            };
            let row = schema
                .iter()
                .map(|name| fields.remove(name).unwrap_or(Value::Null))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }
}
