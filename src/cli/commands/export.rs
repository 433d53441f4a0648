use crate::cli::parser::{Commands, ReportKind};
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_cards, load_contracts, load_coordination, load_devices};
use crate::errors::AppResult;
use crate::models::{
    CONTRACT_FIELDS, CONTRACT_REPORT_TITLE, COORDINATION_FIELDS, COORDINATION_REPORT_TITLE,
    DEVICE_FIELDS, DEVICE_REPORT_TITLE, MAINTENANCE_FIELDS, MAINTENANCE_REPORT_TITLE,
};
use crate::report::range::parse_range;
use crate::report::{
    DocumentAssets, ExportLogic, ExportOutcome, ReportFormat, ensure_writable,
    notify_export_success,
};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        report,
        format,
        out,
        range,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    let bounds = match range.as_deref() {
        None => None,
        Some(r) if r.eq_ignore_ascii_case("all") => None,
        Some(r) => Some(parse_range(r)?),
    };

    // The PDF emitter has no built-in font. A missing or unreadable font is
    // fatal before any record is loaded.
    let assets = if matches!(format, ReportFormat::Pdf) {
        let font = cfg.font_path()?;
        Some(DocumentAssets::load(&font, cfg.logo_path().as_deref())?)
    } else {
        None
    };

    let outcome = match report {
        ReportKind::Contracts => ExportLogic::export(
            || load_contracts(&mut pool, bounds),
            CONTRACT_FIELDS,
            format,
            CONTRACT_REPORT_TITLE,
            "Contract",
            assets.as_ref(),
        )?,
        ReportKind::Devices => ExportLogic::export(
            || load_devices(&mut pool, bounds),
            DEVICE_FIELDS,
            format,
            DEVICE_REPORT_TITLE,
            "Device",
            assets.as_ref(),
        )?,
        ReportKind::Maintenance => ExportLogic::export(
            || load_cards(&mut pool, bounds),
            MAINTENANCE_FIELDS,
            format,
            MAINTENANCE_REPORT_TITLE,
            "Maintenance Card",
            assets.as_ref(),
        )?,
        ReportKind::Coordination => ExportLogic::export(
            || load_coordination(&mut pool, bounds),
            COORDINATION_FIELDS,
            format,
            COORDINATION_REPORT_TITLE,
            "Coordination Request",
            assets.as_ref(),
        )?,
    };

    match outcome {
        ExportOutcome::NoData(msg) => warning(msg),
        ExportOutcome::File(file) => {
            let dir = expand_tilde(out.as_deref().unwrap_or(&cfg.output_dir));
            fs::create_dir_all(&dir)?;
            let path = dir.join(&file.filename);

            ensure_writable(&path, *force)?;
            info(format!("Writing {} ({})", path.display(), file.mime_type));
            fs::write(&path, &file.bytes)?;

            notify_export_success(format.label(), &path);
            let _ = oplog(
                &pool.conn,
                "export",
                &file.filename,
                &format!("{} export ({})", format.label(), file.mime_type),
            );
        }
    }

    Ok(())
}
