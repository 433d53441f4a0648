// src/report/mod.rs

pub mod field;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod matrix;
pub mod pdf;
pub mod range;
pub mod shape;
pub mod widths;
mod xlsx;

pub use field::{CellValue, ExportField, FieldKind, Reportable};
pub use fs_utils::ensure_writable;
pub use logic::{ExportFile, ExportLogic, ExportOutcome};
pub use pdf::DocumentAssets;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Json => "application/json",
            ReportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
            ReportFormat::Xlsx => "XLSX",
            ReportFormat::Pdf => "PDF",
        }
    }
}
