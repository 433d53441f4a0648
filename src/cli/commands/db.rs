use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::table_counts;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |r| r.get(0))?;
            if result == "ok" {
                success("Database integrity check passed");
            } else {
                return Err(AppError::Other(format!(
                    "integrity check failed: {result}"
                )));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database optimized (VACUUM)");
        }

        if *show_info {
            info(format!("Database: {}", cfg.database));
            let mut table = Table::new(&["table", "rows"]);
            for (name, count) in table_counts(&mut pool)? {
                table.add_row(vec![name.to_string(), count.to_string()]);
            }
            println!("{}", table.render());
        }

        if !*check && !*vacuum && !*show_info {
            warning("Nothing to do. Use --check, --vacuum or --info.");
        }
    }
    Ok(())
}
