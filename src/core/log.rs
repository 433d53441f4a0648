use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "seed" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, _cfg: &Config) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let op = color_for_operation(&operation)
                .bold()
                .paint(format!("{operation} [{target}]"))
                .to_string();

            Ok((id, date, op, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let op_width = entries
            .iter()
            .map(|(_, _, op, _)| UnicodeWidthStr::width(strip_ansi(op).as_str()))
            .max()
            .unwrap_or(0);

        for (id, date, op, message) in entries {
            let pad = op_width.saturating_sub(UnicodeWidthStr::width(strip_ansi(&op).as_str()));
            println!("{id:>4}  {date}  {op}{}  {message}", " ".repeat(pad));
        }

        Ok(())
    }
}
