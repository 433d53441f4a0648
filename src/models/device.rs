use crate::errors::AppError;
use crate::report::{CellValue, ExportField, FieldKind, Reportable};
use chrono::NaiveDate;
use serde::Serialize;

/// Operational status of a device (choice field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceStatus {
    Installed,
    Available,
    Damaged,
}

impl DeviceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeviceStatus::Installed => "installed",
            DeviceStatus::Available => "available",
            DeviceStatus::Damaged => "damaged",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Installed => "\u{0645}\u{0631}\u{0643}\u{0628}",
            DeviceStatus::Available => "\u{0645}\u{062A}\u{0648}\u{0641}\u{0631}",
            DeviceStatus::Damaged => "\u{062A}\u{0627}\u{0644}\u{0641}",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "installed" => Ok(Self::Installed),
            "available" => Ok(Self::Available),
            "damaged" => Ok(Self::Damaged),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

/// Where a device currently sits (choice field). Derived, never set
/// directly: a device with a zone is in that zone, otherwise in its
/// warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceLocation {
    Warehouse,
    Zone,
}

impl DeviceLocation {
    pub fn code(&self) -> &'static str {
        match self {
            DeviceLocation::Warehouse => "warehouse",
            DeviceLocation::Zone => "zone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceLocation::Warehouse => "\u{0627}\u{0644}\u{0645}\u{0633}\u{062A}\u{0648}\u{062F}\u{0639}",
            DeviceLocation::Zone => "\u{0627}\u{0644}\u{0645}\u{0646}\u{0637}\u{0642}\u{0629}",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "warehouse" => Ok(Self::Warehouse),
            "zone" => Ok(Self::Zone),
            other => Err(AppError::InvalidLocation(other.to_string())),
        }
    }
}

/// A tracked device, flattened for reporting: category, warehouse and zone
/// are carried as display strings.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    pub id: i64,
    pub serial_number: Option<String>,
    pub name: String,
    pub invoice_number: String,
    pub category: String,
    pub warehouse: String,
    pub zone: Option<String>,
    pub status: DeviceStatus,
    pub ip_address: Option<String>,
    pub responsible_person: String,
    pub transfer_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Device {
    pub fn current_location(&self) -> DeviceLocation {
        if self.zone.is_some() {
            DeviceLocation::Zone
        } else {
            DeviceLocation::Warehouse
        }
    }

    pub fn display_name(&self) -> String {
        let serial = self.serial_number.as_deref().unwrap_or("-");
        format!("{} ({serial})", self.name)
    }
}

pub const DEVICE_FIELDS: &[ExportField] = &[
    ExportField::new("serial_number", "\u{0627}\u{0644}\u{0631}\u{0642}\u{0645} \u{0627}\u{0644}\u{062A}\u{0633}\u{0644}\u{0633}\u{0644}\u{064A}", FieldKind::Text),
    ExportField::new("name", "\u{0627}\u{0633}\u{0645} \u{0627}\u{0644}\u{062C}\u{0647}\u{0627}\u{0632}", FieldKind::Text),
    ExportField::new("invoice_number", "\u{0631}\u{0642}\u{0645} \u{0627}\u{0644}\u{0641}\u{0627}\u{062A}\u{0648}\u{0631}\u{0629}", FieldKind::Text),
    ExportField::new("category", "\u{0627}\u{0644}\u{0641}\u{0626}\u{0629}", FieldKind::Related),
    ExportField::new("warehouse", "\u{0627}\u{0644}\u{0645}\u{062E}\u{0632}\u{0646}", FieldKind::Related),
    ExportField::new("current_location", "\u{0627}\u{0644}\u{0645}\u{0648}\u{0642}\u{0639} \u{0627}\u{0644}\u{062D}\u{0627}\u{0644}\u{064A}", FieldKind::Choice),
    ExportField::new("zone", "\u{0627}\u{0644}\u{0645}\u{0646}\u{0637}\u{0642}\u{0629}", FieldKind::Related),
    ExportField::new("status", "\u{0627}\u{0644}\u{062D}\u{0627}\u{0644}\u{0629}", FieldKind::Choice),
    ExportField::new("ip_address", "\u{0639}\u{0646}\u{0648}\u{0627}\u{0646} IP", FieldKind::Text),
    ExportField::new("responsible_person", "\u{0627}\u{0644}\u{0634}\u{062E}\u{0635} \u{0627}\u{0644}\u{0645}\u{0633}\u{0624}\u{0648}\u{0644}", FieldKind::Text),
    ExportField::new("transfer_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0646}\u{0642}\u{0644}", FieldKind::Date),
    ExportField::new("installation_date", "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{062A}\u{0631}\u{0643}\u{064A}\u{0628}", FieldKind::Date),
    ExportField::new("notes", "\u{0645}\u{0644}\u{0627}\u{062D}\u{0638}\u{0627}\u{062A}", FieldKind::Text),
];

/// Report title: "devices report".
pub const DEVICE_REPORT_TITLE: &str =
    "\u{062A}\u{0642}\u{0631}\u{064A}\u{0631} \u{0627}\u{0644}\u{0623}\u{062C}\u{0647}\u{0632}\u{0629}";

impl Reportable for Device {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "serial_number" => self
                .serial_number
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Missing),
            "name" => CellValue::Text(self.name.clone()),
            "invoice_number" => CellValue::Text(self.invoice_number.clone()),
            "category" => CellValue::Related(self.category.clone()),
            "warehouse" => CellValue::Related(self.warehouse.clone()),
            "current_location" => {
                let loc = self.current_location();
                CellValue::Choice {
                    code: loc.code().to_string(),
                    label: Some(loc.label()),
                }
            }
            "zone" => self
                .zone
                .clone()
                .map(CellValue::Related)
                .unwrap_or(CellValue::Missing),
            "status" => CellValue::Choice {
                code: self.status.code().to_string(),
                label: Some(self.status.label()),
            },
            "ip_address" => self
                .ip_address
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Missing),
            "responsible_person" => CellValue::Text(self.responsible_person.clone()),
            "transfer_date" => self
                .transfer_date
                .map(CellValue::Date)
                .unwrap_or(CellValue::Missing),
            "installation_date" => self
                .installation_date
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

    #[test]
    fn location_follows_zone_assignment() {
        let mut d = Device {
            id: 1,
            serial_number: Some("SN-1".into()),
            name: "Camera".into(),
            invoice_number: "INV-9".into(),
            category: "CCTV".into(),
            warehouse: "Main".into(),
            zone: None,
            status: DeviceStatus::Available,
            ip_address: None,
            responsible_person: "Ops".into(),
            transfer_date: None,
            installation_date: None,
            notes: None,
        };
        assert_eq!(d.current_location(), DeviceLocation::Warehouse);

        d.zone = Some("North".into());
        assert_eq!(d.current_location(), DeviceLocation::Zone);
    }

    #[test]
    fn status_round_trip_and_rejects_unknown() {
        assert_eq!(DeviceStatus::parse("damaged").unwrap(), DeviceStatus::Damaged);
        assert!(DeviceStatus::parse("broken").is_err());
    }
}
