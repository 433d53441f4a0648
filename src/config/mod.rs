use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// TrueType font used by the PDF emitter. Must cover Arabic; a missing
    /// font fails PDF exports instead of silently falling back.
    #[serde(default)]
    pub report_font: Option<String>,

    /// Optional JPEG logo placed in the PDF title block.
    #[serde(default)]
    pub report_logo: Option<String>,

    /// Directory where generated report files land.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            report_font: None,
            report_logo: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    /// `RINVENTORY_CONFIG_DIR` overrides it, so tests and scripts can run
    /// against an isolated configuration.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RINVENTORY_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rinventory")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rinventory")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinventory.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rinventory.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path)
                .map_err(AppError::from)
                .and_then(|content| {
                    serde_yaml::from_str(&content)
                        .map_err(|e| AppError::Config(format!("cannot parse config: {e}")))
                }) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Falling back to defaults, configuration unreadable: {e}"
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files. Returns the resolved
    /// configuration, which in test mode is never written to disk.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }

    /// Resolve the configured font path, expanding a leading `~`.
    pub fn font_path(&self) -> AppResult<PathBuf> {
        let raw = self
            .report_font
            .as_deref()
            .ok_or_else(|| AppError::Font("no report_font configured".into()))?;
        Ok(crate::utils::path::expand_tilde(raw))
    }

    pub fn logo_path(&self) -> Option<PathBuf> {
        self.report_logo
            .as_deref()
            .map(crate::utils::path::expand_tilde)
    }
}
