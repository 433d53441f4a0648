//! Spreadsheet emitter: one styled sheet from a report matrix.

use crate::errors::AppResult;
use crate::report::matrix::ReportMatrix;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use unicode_width::UnicodeWidthStr;

const HEADER_FILL: u32 = 0x4F81BD;

/// Emit a single-sheet workbook: bold white-on-blue centered header, thin
/// borders everywhere, column width `max(15, header_width + 2)` character
/// units. Returns the finished OOXML byte stream.
pub fn emit_spreadsheet(matrix: &ReportMatrix) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (col, header) in matrix.header.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;

        let width = (UnicodeWidthStr::width(header.as_str()) + 2).max(15);
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    for (row_index, row) in matrix.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_with_format(
                (row_index + 1) as u32,
                col as u16,
                value.as_str(),
                &cell_format,
            )?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportMatrix {
        ReportMatrix {
            header: vec!["id".into(), "name".into()],
            rows: vec![
                vec!["1".into(), "first".into()],
                vec!["2".into(), "second".into()],
            ],
        }
    }

    #[test]
    fn produces_a_zip_container() {
        let bytes = emit_spreadsheet(&sample()).unwrap();
        // OOXML workbooks are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn header_only_matrix_still_emits() {
        let m = ReportMatrix {
            header: vec!["only".into()],
            rows: vec![],
        };
        assert!(!emit_spreadsheet(&m).unwrap().is_empty());
    }
}
