//! Tabular formatter: records + field list -> header/rows string matrix.

use crate::report::field::{CellValue, ExportField, FieldKind, Reportable};
use crate::report::shape::shape;

/// Localized boolean labels (yes / no).
pub const YES_LABEL: &str = "\u{0646}\u{0639}\u{0645}";
pub const NO_LABEL: &str = "\u{0644}\u{0627}";

/// Header row plus data rows, all display strings, already shaped.
/// Every row has exactly as many columns as the header.
#[derive(Debug, Clone)]
pub struct ReportMatrix {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportMatrix {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Longest string length observed per column, header included.
    pub fn max_column_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                lengths[i] = lengths[i].max(cell.chars().count());
            }
        }
        lengths
    }
}

/// Build the report matrix for an ordered record slice.
///
/// Row order mirrors the input order; no implicit sorting. Every resolved
/// value (headers included) goes through the text shaper, which is a no-op
/// for pure-LTR strings.
pub fn build_matrix<R: Reportable>(records: &[R], fields: &[ExportField]) -> ReportMatrix {
    let header = fields.iter().map(|f| shape(f.label)).collect();

    let rows = records
        .iter()
        .map(|rec| {
            fields
                .iter()
                .map(|f| shape(&render_cell(rec.cell(f.name), f.kind)))
                .collect()
        })
        .collect();

    ReportMatrix { header, rows }
}

fn render_cell(value: CellValue, kind: FieldKind) -> String {
    match (kind, value) {
        (_, CellValue::Missing) => String::new(),

        (FieldKind::Date, CellValue::Date(d)) => d.format("%Y-%m-%d").to_string(),

        (FieldKind::Boolean, CellValue::Bool(b)) => {
            if b { YES_LABEL } else { NO_LABEL }.to_string()
        }

        (FieldKind::Choice, CellValue::Choice { code, label }) => {
            label.map(str::to_string).unwrap_or(code)
        }

        (FieldKind::Related, CellValue::Related(name)) => name,

        // Any attribute resolves to its string form when the kind does not
        // impose a stricter rule.
        (_, CellValue::Text(s)) => s,
        (_, CellValue::Date(d)) => d.format("%Y-%m-%d").to_string(),
        (_, CellValue::Bool(b)) => if b { YES_LABEL } else { NO_LABEL }.to_string(),
        (_, CellValue::Choice { code, label }) => label.map(str::to_string).unwrap_or(code),
        (_, CellValue::Related(name)) => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Row {
        name: &'static str,
        due: Option<NaiveDate>,
        done: bool,
        status: &'static str,
        zone: Option<&'static str>,
    }

    impl Reportable for Row {
        fn cell(&self, field: &str) -> CellValue {
            match field {
                "name" => CellValue::Text(self.name.to_string()),
                "due" => self
                    .due
                    .map(CellValue::Date)
                    .unwrap_or(CellValue::Missing),
                "done" => CellValue::Bool(self.done),
                "status" => CellValue::Choice {
                    code: self.status.to_string(),
                    label: match self.status {
                        "open" => Some("Open"),
                        _ => None,
                    },
                },
                "zone" => self
                    .zone
                    .map(|z| CellValue::Related(z.to_string()))
                    .unwrap_or(CellValue::Missing),
                _ => CellValue::Missing,
            }
        }
    }

    const FIELDS: &[ExportField] = &[
        ExportField::new("name", "Name", FieldKind::Text),
        ExportField::new("due", "Due", FieldKind::Date),
        ExportField::new("done", "Done", FieldKind::Boolean),
        ExportField::new("status", "Status", FieldKind::Choice),
        ExportField::new("zone", "Zone", FieldKind::Related),
    ];

    fn sample() -> Vec<Row> {
        vec![
            Row {
                name: "first",
                due: NaiveDate::from_ymd_opt(2024, 1, 5),
                done: true,
                status: "open",
                zone: Some("north"),
            },
            Row {
                name: "second",
                due: None,
                done: false,
                status: "weird",
                zone: None,
            },
        ]
    }

    #[test]
    fn matrix_dimensions_match_records_and_fields() {
        let m = build_matrix(&sample(), FIELDS);
        assert_eq!(m.column_count(), FIELDS.len());
        assert_eq!(m.rows.len(), 2);
        for row in &m.rows {
            assert_eq!(row.len(), FIELDS.len());
        }
    }

    #[test]
    fn date_formatting_and_null_date() {
        let m = build_matrix(&sample(), FIELDS);
        assert_eq!(m.rows[0][1], "2024-01-05");
        assert_eq!(m.rows[1][1], "");
    }

    #[test]
    fn booleans_use_localized_labels() {
        let m = build_matrix(&sample(), FIELDS);
        assert_eq!(m.rows[0][2], shape(YES_LABEL));
        assert_eq!(m.rows[1][2], shape(NO_LABEL));
        assert_ne!(m.rows[0][2], "true");
        assert_ne!(m.rows[1][2], "false");
    }

    #[test]
    fn choice_label_with_raw_code_fallback() {
        let m = build_matrix(&sample(), FIELDS);
        assert_eq!(m.rows[0][3], "Open");
        assert_eq!(m.rows[1][3], "weird");
    }

    #[test]
    fn null_related_object_renders_empty() {
        let m = build_matrix(&sample(), FIELDS);
        assert_eq!(m.rows[0][4], "north");
        assert_eq!(m.rows[1][4], "");
    }

    #[test]
    fn empty_record_set_yields_header_only() {
        let m = build_matrix(&Vec::<Row>::new(), FIELDS);
        assert_eq!(m.rows.len(), 0);
        assert_eq!(m.header.len(), FIELDS.len());
    }
}
