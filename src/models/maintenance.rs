use crate::report::{CellValue, ExportField, FieldKind, Reportable};
use chrono::NaiveDate;
use serde::Serialize;

/// A maintenance card against one device. `repaired` is computed: a card
/// with a repair date counts as repaired.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceCard {
    pub id: i64,
    pub device: Option<String>,
    pub report_date: Option<NaiveDate>,
    pub issue_type: String,
    pub repair_date: Option<NaiveDate>,
    pub technician: String,
    pub notes: Option<String>,
}

impl MaintenanceCard {
    pub fn repaired(&self) -> bool {
        self.repair_date.is_some()
    }
}

pub const MAINTENANCE_FIELDS: &[ExportField] = &[
    ExportField::new("device", "\u{0627}\u{0644}\u{062C}\u{0647}\u{0627}\u{0632}", FieldKind::Related),
    ExportField::new("report_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0628}\u{0644}\u{0627}\u{063A}", FieldKind::Date),
    ExportField::new("issue_type", "\u{0646}\u{0648}\u{0639} \u{0627}\u{0644}\u{0645}\u{0634}\u{0643}\u{0644}\u{0629}", FieldKind::Text),
    ExportField::new("repaired", "\u{062A}\u{0645} \u{0627}\u{0644}\u{0625}\u{0635}\u{0644}\u{0627}\u{062D}", FieldKind::Boolean),
    ExportField::new("repair_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0625}\u{0635}\u{0644}\u{0627}\u{062D}", FieldKind::Date),
    ExportField::new("technician", "\u{0627}\u{0644}\u{0641}\u{0646}\u{064A} \u{0627}\u{0644}\u{0645}\u{0633}\u{0624}\u{0648}\u{0644}", FieldKind::Text),
    ExportField::new("notes", "\u{0645}\u{0644}\u{0627}\u{062D}\u{0638}\u{0627}\u{062A}", FieldKind::Text),
];

/// Report title: "maintenance cards report".
pub const MAINTENANCE_REPORT_TITLE: &str =
    "\u{062A}\u{0642}\u{0631}\u{064A}\u{0631} \u{0628}\u{0637}\u{0627}\u{0642}\u{0627}\u{062A} \u{0627}\u{0644}\u{0635}\u{064A}\u{0627}\u{0646}\u{0629}";

impl Reportable for MaintenanceCard {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "device" => self
                .device
                .clone()
                .map(CellValue::Related)
                .unwrap_or(CellValue::Missing),
            "report_date" => self
                .report_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "issue_type" => CellValue::Text(self.issue_type.clone()),
            "repaired" => CellValue::Bool(self.repaired()),
            "repair_date" => self
                .repair_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "technician" => CellValue::Text(self.technician.clone()),
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

    #[test]
    fn repaired_follows_repair_date() {
        let mut card = MaintenanceCard {
            id: 1,
            device: Some("Camera (SN-1)".into()),
            report_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            issue_type: "no signal".into(),
            repair_date: None,
            technician: "Tech".into(),
            notes: None,
        };
        assert!(!card.repaired());

        card.repair_date = NaiveDate::from_ymd_opt(2024, 1, 8);
        assert!(card.repaired());
    }
}
