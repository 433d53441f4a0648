//! Sample dataset for demos and integration tests: three contracts, a
//! handful of devices per contract, and a few maintenance cards and
//! coordination requests.

use crate::db::pool::DbPool;
use crate::db::{log::oplog, queries};
use crate::errors::AppResult;
use crate::models::{Contract, CoordinationRequest, Device, DeviceStatus, MaintenanceCard};
use chrono::NaiveDate;

const CATEGORIES: &[&str] = &["Camera - Dome", "Camera - PTZ", "NVR", "Switch", "Monitor"];

pub struct SeedLogic;

impl SeedLogic {
    pub fn seed(pool: &mut DbPool) -> AppResult<usize> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();

        let mut inserted = 0;

        for i in 1..=3 {
            let contract = Contract {
                contract_number: format!("C-{}", 100 + i),
                name: format!("Contract {i}"),
                start_date: Some(start),
                end_date: Some(end),
                notes: Some(format!("This is contract number {i}")),
            };
            queries::insert_contract(pool, &contract)?;
            inserted += 1;

            for k in 1..=5 {
                let category = CATEGORIES[(k - 1) % CATEGORIES.len()];
                let in_zone = k % 2 == 0;
                let device = Device {
                    id: 0,
                    serial_number: Some(format!("D-{i}{k:02}")),
                    name: format!("{category} {k}"),
                    invoice_number: format!("INV-{i}{k:02}"),
                    category: category.to_string(),
                    warehouse: format!("Warehouse {i}"),
                    zone: in_zone.then(|| format!("Zone {i}-{}", k / 2)),
                    status: match k % 3 {
                        0 => DeviceStatus::Damaged,
                        1 => DeviceStatus::Installed,
                        _ => DeviceStatus::Available,
                    },
                    ip_address: Some(format!("192.168.{i}.{k}")),
                    responsible_person: format!("Tech {k}"),
                    transfer_date: Some(start),
                    installation_date: Some(start),
                    notes: Some("Sample device".to_string()),
                };
                queries::insert_device(pool, &device)?;
                inserted += 1;
            }

            let card = MaintenanceCard {
                id: 0,
                device: None,
                report_date: NaiveDate::from_ymd_opt(2024, 2, i as u32),
                issue_type: "no signal".to_string(),
                repair_date: (i % 2 == 0).then(|| NaiveDate::from_ymd_opt(2024, 2, 10)).flatten(),
                technician: format!("Tech {i}"),
                notes: None,
            };
            let serial = format!("D-{i}01");
            queries::insert_card(pool, &card, Some(&serial))?;
            inserted += 1;

            let request = CoordinationRequest {
                id: 0,
                zone: Some(format!("Zone {i}-1")),
                request_date: NaiveDate::from_ymd_opt(2024, 3, i as u32),
                target_department: "Electricity".to_string(),
                work_type: format!("Cable pulling {i}"),
                location: format!("Sector {i}"),
                work_details: "Pull fiber to the new cabinet".to_string(),
                expected_execution_date: NaiveDate::from_ymd_opt(2024, 3, 20),
                responsible_person: format!("Tech {i}"),
                phone_number: format!("05000000{i:02}"),
                email_sent_date: (i % 2 == 1)
                    .then(|| NaiveDate::from_ymd_opt(2024, 3, i as u32))
                    .flatten(),
                notes: None,
            };
            queries::insert_coordination(pool, &request)?;
            inserted += 1;
        }

        let _ = oplog(
            &pool.conn,
            "seed",
            "sample dataset",
            &format!("{inserted} records inserted"),
        );

        Ok(inserted)
    }
}
