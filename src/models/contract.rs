use crate::report::{CellValue, ExportField, FieldKind, Reportable};
use chrono::NaiveDate;
use serde::Serialize;

/// A facility deployment contract.
#[derive(Debug, Clone, Serialize)]
pub struct Contract {
    pub contract_number: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Contract {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.contract_number, self.name)
    }
}

/// Exported columns of the contracts report, labels in Arabic.
pub const CONTRACT_FIELDS: &[ExportField] = &[
    ExportField::new("contract_number", "\u{0631}\u{0642}\u{0645} \u{0627}\u{0644}\u{0639}\u{0642}\u{062F}", FieldKind::Text),
    ExportField::new("name", "\u{0627}\u{0633}\u{0645} \u{0627}\u{0644}\u{0639}\u{0642}\u{062F}", FieldKind::Text),
    ExportField::new("start_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0628}\u{062F}\u{0627}\u{064A}\u{0629}", FieldKind::Date),
    ExportField::new("end_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0646}\u{0647}\u{0627}\u{064A}\u{0629}", FieldKind::Date),
    ExportField::new("notes", "\u{0645}\u{0644}\u{0627}\u{062D}\u{0638}\u{0627}\u{062A}", FieldKind::Text),
];

/// Report title: "contracts report".
pub const CONTRACT_REPORT_TITLE: &str =
    "\u{062A}\u{0642}\u{0631}\u{064A}\u{0631} \u{0627}\u{0644}\u{0639}\u{0642}\u{0648}\u{062F}";

impl Reportable for Contract {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "contract_number" => CellValue::Text(self.contract_number.clone()),
            "name" => CellValue::Text(self.name.clone()),
            "start_date" => self
                .start_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "end_date" => self
                .end_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "notes" => self
                .notes
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Missing),
            _ => CellValue::Missing,
        }
    }
}
