//! Export coordinator: drives formatter -> emitter for one report request.

use crate::errors::AppResult;
use crate::report::ReportFormat;
use crate::report::field::{ExportField, Reportable};
use crate::report::json_csv::{emit_csv, emit_json};
use crate::report::matrix::build_matrix;
use crate::report::pdf::{DocumentAssets, emit_document};
use crate::report::xlsx::emit_spreadsheet;
use chrono::{DateTime, Utc};

/// Consistent no-data message ("no data available for export").
pub const NO_DATA_MESSAGE: &str =
    "\u{0644}\u{0627} \u{062A}\u{0648}\u{062C}\u{062F} \u{0628}\u{064A}\u{0627}\u{0646}\u{0627}\u{062A} \u{0644}\u{0644}\u{062A}\u{0635}\u{062F}\u{064A}\u{0631}";

/// A finished export: the file bytes plus the HTTP-style metadata a caller
/// needs to hand it out as a download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

/// Outcome of one export call. An empty record set is a first-class outcome,
/// not an error and not a header-only file.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    File(ExportFile),
    NoData(&'static str),
}

pub struct ExportLogic;

impl ExportLogic {
    /// Run one export with the current UTC time stamped into the filename.
    pub fn export<R, P>(
        records_provider: P,
        fields: &[ExportField],
        format: &ReportFormat,
        title: &str,
        model_name: &str,
        assets: Option<&DocumentAssets>,
    ) -> AppResult<ExportOutcome>
    where
        R: Reportable,
        P: FnOnce() -> AppResult<Vec<R>>,
    {
        Self::export_at(records_provider, fields, format, title, model_name, assets, Utc::now())
    }

    /// Like [`Self::export`], with an explicit clock so filenames are
    /// deterministic under test.
    pub fn export_at<R, P>(
        records_provider: P,
        fields: &[ExportField],
        format: &ReportFormat,
        title: &str,
        model_name: &str,
        assets: Option<&DocumentAssets>,
        now: DateTime<Utc>,
    ) -> AppResult<ExportOutcome>
    where
        R: Reportable,
        P: FnOnce() -> AppResult<Vec<R>>,
    {
        let records = records_provider()?;

        if records.is_empty() {
            return Ok(ExportOutcome::NoData(NO_DATA_MESSAGE));
        }

        let matrix = build_matrix(&records, fields);

        let bytes = match format {
            ReportFormat::Csv => emit_csv(&matrix)?,
            ReportFormat::Json => emit_json(&matrix)?,
            ReportFormat::Xlsx => emit_spreadsheet(&matrix)?,
            ReportFormat::Pdf => {
                let assets = assets.ok_or_else(|| {
                    crate::errors::AppError::Font("no report font configured".into())
                })?;
                emit_document(&matrix, title, assets)?
            }
        };

        Ok(ExportOutcome::File(ExportFile {
            bytes,
            mime_type: format.mime_type(),
            filename: export_filename(model_name, format, now),
        }))
    }
}

/// `export_<slug>_<YYYYMMDD_HHMMSS>.<ext>`, UTC.
pub fn export_filename(model_name: &str, format: &ReportFormat, now: DateTime<Utc>) -> String {
    let mut slug = slugify(model_name);
    if slug.is_empty() {
        slug = "export".to_string();
    }
    format!(
        "export_{}_{}.{}",
        slug,
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Collapse anything non-alphanumeric into single dashes: filenames must be
/// safe for filesystems and attachment headers.
fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut dash_pending = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if dash_pending && !out.is_empty() {
                out.push('-');
            }
            dash_pending = false;
            out.push(c.to_ascii_lowercase());
        } else {
            dash_pending = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::field::{CellValue, FieldKind};
    use chrono::TimeZone;

    struct Item(&'static str);

    impl Reportable for Item {
        fn cell(&self, field: &str) -> CellValue {
            match field {
                "name" => CellValue::Text(self.0.to_string()),
                _ => CellValue::Missing,
            }
        }
    }

    const FIELDS: &[ExportField] = &[ExportField::new("name", "Name", FieldKind::Text)];

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn zero_records_short_circuits_before_any_emitter() {
        // A PDF export with no assets would fail inside the emitter; with an
        // empty provider it must not get that far.
        let outcome = ExportLogic::export_at(
            || Ok(Vec::<Item>::new()),
            FIELDS,
            &ReportFormat::Pdf,
            "title",
            "Device",
            None,
            fixed_now(),
        )
        .unwrap();
        assert!(matches!(outcome, ExportOutcome::NoData(_)));
    }

    #[test]
    fn filename_slug_and_timestamp() {
        assert_eq!(
            export_filename("Maintenance Card", &ReportFormat::Xlsx, fixed_now()),
            "export_maintenance-card_20240301_100000.xlsx"
        );
        assert_eq!(
            export_filename("Maintenance Card", &ReportFormat::Pdf, fixed_now()),
            "export_maintenance-card_20240301_100000.pdf"
        );
    }

    #[test]
    fn slug_collapses_unsafe_characters() {
        assert_eq!(slugify("a/b\\c:  d"), "a-b-c-d");
        assert_eq!(slugify("--"), "");
        assert_eq!(slugify("Contract"), "contract");
        // All-symbol names fall back to a fixed slug.
        assert!(export_filename("؟؟؟", &ReportFormat::Csv, fixed_now()).starts_with("export_export_"));
    }

    #[test]
    fn spreadsheet_export_carries_ooxml_mime() {
        let outcome = ExportLogic::export_at(
            || Ok(vec![Item("one")]),
            FIELDS,
            &ReportFormat::Xlsx,
            "title",
            "Contract",
            None,
            fixed_now(),
        )
        .unwrap();

        let ExportOutcome::File(file) = outcome else {
            panic!("expected a file outcome");
        };
        assert_eq!(
            file.mime_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(&file.bytes[..2], b"PK");
        assert_eq!(file.filename, "export_contract_20240301_100000.xlsx");
    }

    #[test]
    fn pdf_without_font_assets_is_fatal() {
        let err = ExportLogic::export_at(
            || Ok(vec![Item("one")]),
            FIELDS,
            &ReportFormat::Pdf,
            "title",
            "Contract",
            None,
            fixed_now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("font"));
    }

    #[test]
    fn provider_errors_propagate() {
        let result = ExportLogic::export_at(
            || -> AppResult<Vec<Item>> {
                Err(crate::errors::AppError::Other("provider failed".into()))
            },
            FIELDS,
            &ReportFormat::Csv,
            "title",
            "Contract",
            None,
            fixed_now(),
        );
        assert!(result.is_err());
    }
}
