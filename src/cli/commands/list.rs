use crate::cli::parser::{Commands, ReportKind};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_cards, load_contracts, load_coordination, load_devices};
use crate::errors::AppResult;
use crate::report::range::parse_range;
use crate::ui::messages::info;
use crate::utils::table::Table;
use chrono::NaiveDate;

fn fmt_date(d: &Option<NaiveDate>) -> String {
    d.map(|v| v.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List { report, range } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let bounds = match range.as_deref() {
        None => None,
        Some(r) if r.eq_ignore_ascii_case("all") => None,
        Some(r) => Some(parse_range(r)?),
    };

    match report {
        ReportKind::Contracts => {
            let contracts = load_contracts(&mut pool, bounds)?;
            let mut table = Table::new(&["number", "name", "start", "end"]);
            for c in &contracts {
                table.add_row(vec![
                    c.contract_number.clone(),
                    c.name.clone(),
                    fmt_date(&c.start_date),
                    fmt_date(&c.end_date),
                ]);
            }
            println!("{}", table.render());
            info(format!("{} contract(s)", contracts.len()));
        }

        ReportKind::Devices => {
            let devices = load_devices(&mut pool, bounds)?;
            let mut table = Table::new(&["id", "serial", "name", "status", "location"]);
            for d in &devices {
                let location = d
                    .zone
                    .clone()
                    .unwrap_or_else(|| d.warehouse.clone());
                table.add_row(vec![
                    d.id.to_string(),
                    d.serial_number.clone().unwrap_or_default(),
                    d.name.clone(),
                    d.status.code().to_string(),
                    location,
                ]);
            }
            println!("{}", table.render());
            info(format!("{} device(s)", devices.len()));
        }

        ReportKind::Maintenance => {
            let cards = load_cards(&mut pool, bounds)?;
            let mut table = Table::new(&["id", "device", "reported", "repaired", "technician"]);
            for m in &cards {
                table.add_row(vec![
                    m.id.to_string(),
                    m.device.clone().unwrap_or_default(),
                    fmt_date(&m.report_date),
                    if m.repaired() { "yes".into() } else { "no".into() },
                    m.technician.clone(),
                ]);
            }
            println!("{}", table.render());
            info(format!("{} maintenance card(s)", cards.len()));
        }

        ReportKind::Coordination => {
            let requests = load_coordination(&mut pool, bounds)?;
            let mut table = Table::new(&["id", "zone", "requested", "work type", "responsible"]);
            for r in &requests {
                table.add_row(vec![
                    r.id.to_string(),
                    r.zone.clone().unwrap_or_default(),
                    fmt_date(&r.request_date),
                    r.work_type.clone(),
                    r.responsible_person.clone(),
                ]);
            }
            println!("{}", table.render());
            info(format!("{} coordination request(s)", requests.len()));
        }
    }

    Ok(())
}
