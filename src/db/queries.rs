//! Ordered record queries and simple mutations for the three tracked tables.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Contract, CoordinationRequest, Device, DeviceStatus, MaintenanceCard};
use chrono::NaiveDate;
use rusqlite::{Row, params};

fn date_opt(s: Option<String>) -> Option<NaiveDate> {
    s.and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok())
}

fn date_str(d: &Option<NaiveDate>) -> Option<String> {
    d.map(|v| v.format("%Y-%m-%d").to_string())
}

// ---------------------------
// Contracts
// ---------------------------

fn map_contract(row: &Row<'_>) -> rusqlite::Result<Contract> {
    Ok(Contract {
        contract_number: row.get(0)?,
        name: row.get(1)?,
        start_date: date_opt(row.get(2)?),
        end_date: date_opt(row.get(3)?),
        notes: row.get(4)?,
    })
}

/// Contracts ordered by start date descending (newest first), optionally
/// restricted to a start-date range.
pub fn load_contracts(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Contract>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT contract_number, name, start_date, end_date, notes
                 FROM contracts
                 ORDER BY start_date DESC, contract_number ASC",
            )?;
            for r in stmt.query_map([], map_contract)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT contract_number, name, start_date, end_date, notes
                 FROM contracts
                 WHERE start_date BETWEEN ?1 AND ?2
                 ORDER BY start_date DESC, contract_number ASC",
            )?;
            let args = params![start.to_string(), end.to_string()];
            for r in stmt.query_map(args, map_contract)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_contract(pool: &mut DbPool, c: &Contract) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO contracts (contract_number, name, start_date, end_date, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            c.contract_number,
            c.name,
            date_str(&c.start_date),
            date_str(&c.end_date),
            c.notes
        ],
    )?;
    Ok(())
}

pub fn delete_contract(pool: &mut DbPool, contract_number: &str) -> AppResult<usize> {
    Ok(pool.conn.execute(
        "DELETE FROM contracts WHERE contract_number = ?1",
        params![contract_number],
    )?)
}

// ---------------------------
// Devices
// ---------------------------

fn map_device(row: &Row<'_>) -> rusqlite::Result<Device> {
    let status: String = row.get(7)?;
    Ok(Device {
        id: row.get(0)?,
        serial_number: row.get(1)?,
        name: row.get(2)?,
        invoice_number: row.get(3)?,
        category: row.get(4)?,
        warehouse: row.get(5)?,
        zone: row.get(6)?,
        status: DeviceStatus::parse(&status).unwrap_or(DeviceStatus::Available),
        ip_address: row.get(8)?,
        responsible_person: row.get(9)?,
        transfer_date: date_opt(row.get(10)?),
        installation_date: date_opt(row.get(11)?),
        notes: row.get(12)?,
    })
}

const DEVICE_COLUMNS: &str = "id, serial_number, name, invoice_number, category, warehouse,
     zone, status, ip_address, responsible_person, transfer_date, installation_date, notes";

/// Devices in insertion order, optionally restricted by installation date.
pub fn load_devices(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Device>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let sql = format!("SELECT {DEVICE_COLUMNS} FROM devices ORDER BY id ASC");
            let mut stmt = pool.conn.prepare(&sql)?;
            for r in stmt.query_map([], map_device)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let sql = format!(
                "SELECT {DEVICE_COLUMNS} FROM devices
                 WHERE installation_date BETWEEN ?1 AND ?2
                 ORDER BY id ASC"
            );
            let mut stmt = pool.conn.prepare(&sql)?;
            let args = params![start.to_string(), end.to_string()];
            for r in stmt.query_map(args, map_device)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_device(pool: &mut DbPool, d: &Device) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO devices (serial_number, name, invoice_number, category, warehouse,
                              zone, status, ip_address, responsible_person,
                              transfer_date, installation_date, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            d.serial_number,
            d.name,
            d.invoice_number,
            d.category,
            d.warehouse,
            d.zone,
            d.status.code(),
            d.ip_address,
            d.responsible_person,
            date_str(&d.transfer_date),
            date_str(&d.installation_date),
            d.notes
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn delete_device(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    Ok(pool
        .conn
        .execute("DELETE FROM devices WHERE id = ?1", params![id])?)
}

/// Flip a device's status, used when a maintenance card is opened or closed.
pub fn set_device_status(pool: &mut DbPool, serial: &str, status: DeviceStatus) -> AppResult<()> {
    pool.conn.execute(
        "UPDATE devices SET status = ?1 WHERE serial_number = ?2",
        params![status.code(), serial],
    )?;
    Ok(())
}

// ---------------------------
// Maintenance cards
// ---------------------------

fn map_card(row: &Row<'_>) -> rusqlite::Result<MaintenanceCard> {
    let device_name: Option<String> = row.get(7)?;
    let device_serial: Option<String> = row.get(1)?;
    let device = match (device_name, device_serial) {
        (Some(name), Some(serial)) => Some(format!("{name} ({serial})")),
        (None, Some(serial)) => Some(serial),
        _ => None,
    };

    Ok(MaintenanceCard {
        id: row.get(0)?,
        device,
        report_date: date_opt(row.get(2)?),
        issue_type: row.get(3)?,
        repair_date: date_opt(row.get(4)?),
        technician: row.get(5)?,
        notes: row.get(6)?,
    })
}

const CARD_SELECT: &str = "SELECT m.id, m.device_serial, m.report_date, m.issue_type,
            m.repair_date, m.technician, m.notes, d.name
     FROM maintenance_cards m
     LEFT JOIN devices d ON d.serial_number = m.device_serial";

/// Maintenance cards in reporting order, optionally restricted by report
/// date. The device column resolves to `name (serial)` when the serial
/// still matches a device, the bare serial otherwise.
pub fn load_cards(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<MaintenanceCard>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let sql = format!("{CARD_SELECT} ORDER BY m.report_date ASC, m.id ASC");
            let mut stmt = pool.conn.prepare(&sql)?;
            for r in stmt.query_map([], map_card)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let sql = format!(
                "{CARD_SELECT}
                 WHERE m.report_date BETWEEN ?1 AND ?2
                 ORDER BY m.report_date ASC, m.id ASC"
            );
            let mut stmt = pool.conn.prepare(&sql)?;
            let args = params![start.to_string(), end.to_string()];
            for r in stmt.query_map(args, map_card)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_card(pool: &mut DbPool, card: &MaintenanceCard, serial: Option<&str>) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO maintenance_cards (device_serial, report_date, issue_type,
                                        repair_date, technician, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            serial,
            date_str(&card.report_date),
            card.issue_type,
            date_str(&card.repair_date),
            card.technician,
            card.notes
        ],
    )?;
    let id = pool.conn.last_insert_rowid();

    // A card without a repair date marks the device damaged; a repaired
    // card puts it back in service.
    if let Some(serial) = serial {
        let status = if card.repair_date.is_some() {
            DeviceStatus::Installed
        } else {
            DeviceStatus::Damaged
        };
        set_device_status(pool, serial, status)?;
    }

    Ok(id)
}

pub fn delete_card(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    Ok(pool
        .conn
        .execute("DELETE FROM maintenance_cards WHERE id = ?1", params![id])?)
}

// ---------------------------
// Coordination requests
// ---------------------------

fn map_coordination(row: &Row<'_>) -> rusqlite::Result<CoordinationRequest> {
    Ok(CoordinationRequest {
        id: row.get(0)?,
        zone: row.get(1)?,
        request_date: date_opt(row.get(2)?),
        target_department: row.get(3)?,
        work_type: row.get(4)?,
        location: row.get(5)?,
        work_details: row.get(6)?,
        expected_execution_date: date_opt(row.get(7)?),
        responsible_person: row.get(8)?,
        phone_number: row.get(9)?,
        email_sent_date: date_opt(row.get(10)?),
        notes: row.get(11)?,
    })
}

const COORDINATION_COLUMNS: &str = "id, zone, request_date, target_department, work_type,
     location, work_details, expected_execution_date, responsible_person,
     phone_number, email_sent_date, notes";

/// Coordination requests in request order, optionally restricted by request
/// date.
pub fn load_coordination(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<CoordinationRequest>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let sql = format!(
                "SELECT {COORDINATION_COLUMNS} FROM coordination_requests
                 ORDER BY request_date ASC, id ASC"
            );
            let mut stmt = pool.conn.prepare(&sql)?;
            for r in stmt.query_map([], map_coordination)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let sql = format!(
                "SELECT {COORDINATION_COLUMNS} FROM coordination_requests
                 WHERE request_date BETWEEN ?1 AND ?2
                 ORDER BY request_date ASC, id ASC"
            );
            let mut stmt = pool.conn.prepare(&sql)?;
            let args = params![start.to_string(), end.to_string()];
            for r in stmt.query_map(args, map_coordination)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_coordination(pool: &mut DbPool, c: &CoordinationRequest) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO coordination_requests (zone, request_date, target_department, work_type,
                                            location, work_details, expected_execution_date,
                                            responsible_person, phone_number, email_sent_date,
                                            notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            c.zone,
            date_str(&c.request_date),
            c.target_department,
            c.work_type,
            c.location,
            c.work_details,
            date_str(&c.expected_execution_date),
            c.responsible_person,
            c.phone_number,
            date_str(&c.email_sent_date),
            c.notes
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn delete_coordination(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    Ok(pool
        .conn
        .execute("DELETE FROM coordination_requests WHERE id = ?1", params![id])?)
}

// ---------------------------
// Stats
// ---------------------------

/// Row counts per table, for `db --info`.
pub fn table_counts(pool: &mut DbPool) -> AppResult<Vec<(&'static str, i64)>> {
    let mut counts = Vec::new();
    for table in [
        "contracts",
        "devices",
        "maintenance_cards",
        "coordination_requests",
        "log",
    ] {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let n: i64 = pool.conn.query_row(&sql, [], |r| r.get(0))?;
        counts.push((table, n));
    }
    Ok(counts)
}
