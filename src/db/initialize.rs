use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet. Dates are stored as
/// `YYYY-MM-DD` text, choice fields as their short codes.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS contracts (
             contract_number TEXT PRIMARY KEY,
             name            TEXT NOT NULL,
             start_date      TEXT,
             end_date        TEXT,
             notes           TEXT
         );

         CREATE TABLE IF NOT EXISTS devices (
             id                 INTEGER PRIMARY KEY AUTOINCREMENT,
             serial_number      TEXT UNIQUE,
             name               TEXT NOT NULL,
             invoice_number     TEXT NOT NULL,
             category           TEXT NOT NULL,
             warehouse          TEXT NOT NULL,
             zone               TEXT,
             status             TEXT NOT NULL,
             ip_address         TEXT,
             responsible_person TEXT NOT NULL,
             transfer_date      TEXT,
             installation_date  TEXT,
             notes              TEXT
         );

         CREATE TABLE IF NOT EXISTS maintenance_cards (
             id            INTEGER PRIMARY KEY AUTOINCREMENT,
             device_serial TEXT,
             report_date   TEXT,
             issue_type    TEXT NOT NULL,
             repair_date   TEXT,
             technician    TEXT NOT NULL,
             notes         TEXT
         );

         CREATE TABLE IF NOT EXISTS coordination_requests (
             id                      INTEGER PRIMARY KEY AUTOINCREMENT,
             zone                    TEXT,
             request_date            TEXT,
             target_department       TEXT NOT NULL,
             work_type               TEXT NOT NULL,
             location                TEXT NOT NULL,
             work_details            TEXT NOT NULL,
             expected_execution_date TEXT,
             responsible_person      TEXT NOT NULL,
             phone_number            TEXT NOT NULL,
             email_sent_date         TEXT,
             notes                   TEXT
         );

         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL,
             message   TEXT NOT NULL
         );",
    )?;

    Ok(())
}
