use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, db_override: Option<String>, is_test: bool) -> AppResult<()> {
    if let Commands::Init = cmd {
        let cfg = Config::init_all(db_override, is_test)?;

        info(format!("Initializing database: {}", cfg.database));
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let _ = oplog(&pool.conn, "init", &cfg.database, "database initialized");
        success("Database and configuration ready");
    }
    Ok(())
}
