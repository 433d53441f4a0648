use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    info(format!("Configuration file: {}", path.display()));
                    println!("{content}");
                }
                Err(_) => {
                    warning(format!(
                        "No configuration file at {}, using defaults",
                        path.display()
                    ));
                    println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
                }
            }
        }

        if *check {
            check_resources(cfg);
        }

        if !*print_config && !*check {
            warning("Nothing to do. Use --print or --check.");
        }
    }
    Ok(())
}

/// Verify the report resources the PDF emitter depends on.
fn check_resources(cfg: &Config) {
    match cfg.font_path() {
        Ok(path) if path.exists() => {
            success(format!("Report font found: {}", path.display()));
        }
        Ok(path) => {
            error(format!(
                "Report font configured but missing: {}",
                path.display()
            ));
        }
        Err(_) => {
            warning("No report_font configured. PDF export will fail until one is set.");
        }
    }

    match cfg.logo_path() {
        Some(path) if path.exists() => {
            success(format!("Report logo found: {}", path.display()));
        }
        Some(path) => {
            warning(format!(
                "Report logo configured but missing: {}",
                path.display()
            ));
        }
        None => {
            info("No report_logo configured. PDF reports will omit the logo.");
        }
    }

    if std::path::Path::new(&cfg.database).exists() {
        success(format!("Database found: {}", cfg.database));
    } else {
        warning(format!("Database not found: {}. Run `init` first.", cfg.database));
    }
}
