use crate::cli::parser::{Commands, DelTarget};
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_card, delete_contract, delete_coordination, delete_device};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { target } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    let (kind, key, deleted) = match target {
        DelTarget::Contract { number } => {
            ("contract", number.clone(), delete_contract(&mut pool, number)?)
        }
        DelTarget::Device { id } => ("device", id.to_string(), delete_device(&mut pool, *id)?),
        DelTarget::Card { id } => {
            ("maintenance card", id.to_string(), delete_card(&mut pool, *id)?)
        }
        DelTarget::Coordination { id } => (
            "coordination request",
            id.to_string(),
            delete_coordination(&mut pool, *id)?,
        ),
    };

    if deleted == 0 {
        warning(format!("No {kind} found for {key}"));
    } else {
        let _ = oplog(&pool.conn, "del", &key, &format!("{kind} deleted"));
        success(format!("Deleted {kind} {key}"));
    }

    Ok(())
}
