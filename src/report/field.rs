//! Static report field declarations.
//!
//! Each report type declares its exported columns as a const slice of
//! [`ExportField`]s, so the shape of every report is a compile-time contract
//! instead of runtime reflection over the record type.

use chrono::NaiveDate;

/// Presentation rule for one exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Attribute's string form; missing value renders empty.
    Text,
    /// `YYYY-MM-DD`; missing date renders empty.
    Date,
    /// Fixed localized yes/no labels, never `true`/`false`.
    Boolean,
    /// Stored code mapped to its human label, raw code as fallback.
    Choice,
    /// Display string of a referenced object; a null reference renders empty.
    Related,
}

/// One exported column: attribute name, display header, presentation rule.
#[derive(Debug, Clone, Copy)]
pub struct ExportField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl ExportField {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Value of one record attribute, as handed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Date(NaiveDate),
    Bool(bool),
    /// Stored code plus its label, if the mapping knows the code.
    Choice {
        code: String,
        label: Option<&'static str>,
    },
    /// Display string of the referenced object.
    Related(String),
    /// Null attribute or null reference.
    Missing,
}

/// A record that can appear in a report: named attribute lookup only,
/// the formatter never sees the concrete type.
pub trait Reportable {
    fn cell(&self, field: &str) -> CellValue;
}
