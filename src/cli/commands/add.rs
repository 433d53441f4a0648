use crate::cli::parser::{AddTarget, Commands};
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_card, insert_contract, insert_coordination, insert_device};
use crate::errors::{AppError, AppResult};
use crate::models::{Contract, CoordinationRequest, Device, DeviceStatus, MaintenanceCard};
use crate::ui::messages::success;
use chrono::NaiveDate;

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn parse_date_opt(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    s.as_deref().map(parse_date).transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Add { target } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match target {
        AddTarget::Contract {
            number,
            name,
            start,
            end,
            notes,
        } => {
            let contract = Contract {
                contract_number: number.clone(),
                name: name.clone(),
                start_date: parse_date_opt(start)?,
                end_date: parse_date_opt(end)?,
                notes: notes.clone(),
            };
            insert_contract(&mut pool, &contract)?;
            let _ = oplog(&pool.conn, "add", number, "contract added");
            success(format!("Contract added: {}", contract.display_name()));
        }

        AddTarget::Device {
            name,
            serial,
            invoice,
            category,
            warehouse,
            zone,
            status,
            ip,
            responsible,
            transfer,
            installed,
            notes,
        } => {
            let device = Device {
                id: 0,
                serial_number: serial.clone(),
                name: name.clone(),
                invoice_number: invoice.clone(),
                category: category.clone(),
                warehouse: warehouse.clone(),
                zone: zone.clone(),
                status: DeviceStatus::parse(status)?,
                ip_address: ip.clone(),
                responsible_person: responsible.clone(),
                transfer_date: parse_date_opt(transfer)?,
                installation_date: parse_date_opt(installed)?,
                notes: notes.clone(),
            };
            let id = insert_device(&mut pool, &device)?;
            let _ = oplog(&pool.conn, "add", &id.to_string(), "device added");
            success(format!("Device added with id {id}: {}", device.display_name()));
        }

        AddTarget::Card {
            device,
            reported,
            issue,
            repaired,
            technician,
            notes,
        } => {
            let card = MaintenanceCard {
                id: 0,
                device: Some(device.clone()),
                report_date: parse_date_opt(reported)?,
                issue_type: issue.clone(),
                repair_date: parse_date_opt(repaired)?,
                technician: technician.clone(),
                notes: notes.clone(),
            };
            let id = insert_card(&mut pool, &card, Some(device))?;
            let _ = oplog(&pool.conn, "add", &id.to_string(), "maintenance card added");
            success(format!("Maintenance card added with id {id} for device {device}"));
        }

        AddTarget::Coordination {
            work_type,
            zone,
            requested,
            department,
            location,
            details,
            expected,
            responsible,
            phone,
            email_sent,
            notes,
        } => {
            let request = CoordinationRequest {
                id: 0,
                zone: zone.clone(),
                request_date: parse_date_opt(requested)?,
                target_department: department.clone(),
                work_type: work_type.clone(),
                location: location.clone(),
                work_details: details.clone(),
                expected_execution_date: parse_date_opt(expected)?,
                responsible_person: responsible.clone(),
                phone_number: phone.clone(),
                email_sent_date: parse_date_opt(email_sent)?,
                notes: notes.clone(),
            };
            let id = insert_coordination(&mut pool, &request)?;
            let _ = oplog(&pool.conn, "add", &id.to_string(), "coordination request added");
            success(format!(
                "Coordination request added with id {id}: {}",
                request.display_name()
            ));
        }
    }

    Ok(())
}
