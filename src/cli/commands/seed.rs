use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let inserted = SeedLogic::seed(&mut pool)?;
        success(format!("Sample dataset loaded: {inserted} record(s)"));
    }
    Ok(())
}
