use crate::report::{CellValue, ExportField, FieldKind, Reportable};
use chrono::NaiveDate;
use serde::Serialize;

/// A coordination request towards an external department for work inside a
/// zone. The zone is carried as a display string.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinationRequest {
    pub id: i64,
    pub zone: Option<String>,
    pub request_date: Option<NaiveDate>,
    pub target_department: String,
    pub work_type: String,
    pub location: String,
    pub work_details: String,
    pub expected_execution_date: Option<NaiveDate>,
    pub responsible_person: String,
    pub phone_number: String,
    pub email_sent_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CoordinationRequest {
    pub fn display_name(&self) -> String {
        let zone = self.zone.as_deref().unwrap_or("-");
        format!("{} ({zone})", self.work_type)
    }
}

pub const COORDINATION_FIELDS: &[ExportField] = &[
    ExportField::new("zone", "\u{0627}\u{0644}\u{0645}\u{0646}\u{0637}\u{0642}\u{0629}", FieldKind::Related),
    ExportField::new("request_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0637}\u{0644}\u{0628}", FieldKind::Date),
    ExportField::new("target_department", "\u{0627}\u{0644}\u{062C}\u{0647}\u{0629} \u{0627}\u{0644}\u{0645}\u{0633}\u{062A}\u{0647}\u{062F}\u{0641}\u{0629}", FieldKind::Text),
    ExportField::new("work_type", "\u{0646}\u{0648}\u{0639} \u{0627}\u{0644}\u{0639}\u{0645}\u{0644}", FieldKind::Text),
    ExportField::new("location", "\u{0627}\u{0644}\u{0645}\u{0648}\u{0642}\u{0639}", FieldKind::Text),
    ExportField::new("work_details", "\u{062A}\u{0641}\u{0627}\u{0635}\u{064A}\u{0644} \u{0627}\u{0644}\u{0639}\u{0645}\u{0644}", FieldKind::Text),
    ExportField::new("expected_execution_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{062A}\u{0646}\u{0641}\u{064A}\u{0630} \u{0627}\u{0644}\u{0645}\u{062A}\u{0648}\u{0642}\u{0639}", FieldKind::Date),
    ExportField::new("responsible_person", "\u{0627}\u{0644}\u{0634}\u{062E}\u{0635} \u{0627}\u{0644}\u{0645}\u{0633}\u{0624}\u{0648}\u{0644}", FieldKind::Text),
    ExportField::new("phone_number", "\u{0631}\u{0642}\u{0645} \u{0627}\u{0644}\u{0647}\u{0627}\u{062A}\u{0641}", FieldKind::Text),
    ExportField::new("email_sent_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0625}\u{0631}\u{0633}\u{0627}\u{0644} \u{0627}\u{0644}\u{0628}\u{0631}\u{064A}\u{062F}", FieldKind::Date),
    ExportField::new("notes", "\u{0645}\u{0644}\u{0627}\u{062D}\u{0638}\u{0627}\u{062A}", FieldKind::Text),
];

/// Report title: "coordination requests report".
pub const COORDINATION_REPORT_TITLE: &str =
    "\u{062A}\u{0642}\u{0631}\u{064A}\u{0631} \u{0637}\u{0644}\u{0628}\u{0627}\u{062A} \u{0627}\u{0644}\u{062A}\u{0646}\u{0633}\u{064A}\u{0642}";

impl Reportable for CoordinationRequest {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "zone" => self
                .zone
                .clone()
                .map(CellValue::Related)
                .unwrap_or(CellValue::Missing),
            "request_date" => self
                .request_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "target_department" => CellValue::Text(self.target_department.clone()),
            "work_type" => CellValue::Text(self.work_type.clone()),
            "location" => CellValue::Text(self.location.clone()),
            "work_details" => CellValue::Text(self.work_details.clone()),
            "expected_execution_date" => self
                .expected_execution_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "responsible_person" => CellValue::Text(self.responsible_person.clone()),
            "phone_number" => CellValue::Text(self.phone_number.clone()),
            "email_sent_date" => self
                .email_sent_date
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::matrix::build_matrix;

    fn sample() -> CoordinationRequest {
        CoordinationRequest {
            id: 1,
            zone: Some("Zone 1-1".into()),
            request_date: NaiveDate::from_ymd_opt(2024, 4, 2),
            target_department: "Electricity".into(),
            work_type: "Cable pulling".into(),
            location: "Sector B".into(),
            work_details: "Pull fiber along the north fence".into(),
            expected_execution_date: NaiveDate::from_ymd_opt(2024, 4, 20),
            responsible_person: "Ops".into(),
            phone_number: "0500000000".into(),
            email_sent_date: None,
            notes: None,
        }
    }

    #[test]
    fn exports_one_column_per_field() {
        let m = build_matrix(&[sample()], COORDINATION_FIELDS);
        assert_eq!(m.column_count(), COORDINATION_FIELDS.len());
        assert_eq!(m.rows[0][1], "2024-04-02");
        // Unsent email renders as an empty cell, not a placeholder.
        assert_eq!(m.rows[0][9], "");
    }
}
