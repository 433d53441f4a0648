//! CSV / JSON emitters over the shared report matrix.

use crate::errors::AppResult;
use crate::report::matrix::ReportMatrix;
use serde_json::{Map, Value};

/// Emit the matrix as CSV, header row included.
pub fn emit_csv(matrix: &ReportMatrix) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(&matrix.header)?;
    for row in &matrix.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| crate::errors::AppError::Export(format!("CSV buffer error: {e}")))
}

/// Emit the matrix as a pretty-printed JSON array of objects keyed by the
/// header labels.
pub fn emit_json(matrix: &ReportMatrix) -> AppResult<Vec<u8>> {
    let objects: Vec<Value> = matrix
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (label, value) in matrix.header.iter().zip(row) {
                obj.insert(label.clone(), Value::String(value.clone()));
            }
            Value::Object(obj)
        })
        .collect();

    Ok(serde_json::to_vec_pretty(&Value::Array(objects))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportMatrix {
        ReportMatrix {
            header: vec!["id".into(), "name".into()],
            rows: vec![vec!["1".into(), "first".into()]],
        }
    }

    #[test]
    fn csv_contains_header_and_rows() {
        let bytes = emit_csv(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("id,name"));
        assert!(text.contains("1,first"));
    }

    #[test]
    fn json_is_an_array_of_labelled_objects() {
        let bytes = emit_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed[0]["name"], "first");
    }
}
