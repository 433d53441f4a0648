//! Paginated document emitter.
//!
//! Lays out a report matrix as a landscape A4 table: title block (optional
//! logo left, shaped title right), then the data table with a light-grey
//! header band that repeats on every page. The configured TrueType font is
//! embedded as a CID font with Identity-H encoding, so shaped Arabic glyphs
//! render exactly as placed.

use crate::errors::{AppError, AppResult};
use crate::report::matrix::ReportMatrix;
use crate::report::shape::shape;
use crate::report::widths::{self, WidthBounds};
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;
use ttf_parser::{Face, GlyphId};

const FONT_NAME: &[u8] = b"F1";
const LOGO_NAME: &[u8] = b"Im1";

/// External resources the document emitter depends on. The font is
/// mandatory: without it the shaped glyphs cannot be rendered, so a missing
/// or unreadable font file fails the whole export. The logo is optional and
/// must be a JPEG (embedded without re-encoding).
pub struct DocumentAssets {
    pub font_data: Vec<u8>,
    pub logo: Option<Vec<u8>>,
}

impl DocumentAssets {
    pub fn load(font_path: &Path, logo_path: Option<&Path>) -> AppResult<Self> {
        let font_data = fs::read(font_path).map_err(|e| {
            AppError::Font(format!(
                "cannot read report font '{}': {e}",
                font_path.display()
            ))
        })?;

        let logo = match logo_path {
            Some(p) => Some(fs::read(p).map_err(|e| {
                AppError::Export(format!("cannot read logo '{}': {e}", p.display()))
            })?),
            None => None,
        };

        Ok(Self { font_data, logo })
    }
}

/// Emit a landscape A4 document for the matrix. `title` is logical-order
/// text; it is shaped here.
pub fn emit_document(
    matrix: &ReportMatrix,
    title: &str,
    assets: &DocumentAssets,
) -> AppResult<Vec<u8>> {
    let face = Face::parse(&assets.font_data, 0)
        .map_err(|e| AppError::Font(format!("cannot parse report font: {e}")))?;

    let mut doc = DocWriter::new(face, assets.logo.as_deref())?;
    doc.write_table(&shape(title), matrix);
    Ok(doc.finish(&assets.font_data))
}

struct Logo<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    gray: bool,
}

struct DocWriter<'a> {
    pdf: Pdf,
    face: Face<'a>,
    logo: Option<Logo<'a>>,

    catalog_id: Ref,
    pages_id: Ref,
    type0_id: Ref,
    cid_id: Ref,
    descriptor_id: Ref,
    font_file_id: Ref,
    logo_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    next_id: i32,

    // Highest glyph id placed in any content stream, for the widths array.
    max_gid: u16,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
    title_font_size: f32,
}

impl<'a> DocWriter<'a> {
    fn new(face: Face<'a>, logo_data: Option<&'a [u8]>) -> AppResult<Self> {
        let logo = match logo_data {
            Some(data) => {
                let (width, height, components) = jpeg_dimensions(data)
                    .ok_or_else(|| AppError::Export("logo is not a valid JPEG".into()))?;
                Some(Logo {
                    data,
                    width,
                    height,
                    gray: components == 1,
                })
            }
            None => None,
        };

        Ok(Self {
            pdf: Pdf::new(),
            face,
            logo,

            catalog_id: Ref::new(1),
            pages_id: Ref::new(2),
            type0_id: Ref::new(3),
            cid_id: Ref::new(4),
            descriptor_id: Ref::new(5),
            font_file_id: Ref::new(6),
            logo_id: Ref::new(7),
            page_refs: Vec::new(),
            current_content_id: None,
            next_id: 8,

            max_gid: 0,

            // Landscape A4.
            page_w: 842.0,
            page_h: 595.0,
            margin: 31.0,
            row_h: 20.0,
            font_size: 10.0,
            title_font_size: 20.0,
        })
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        resources.fonts().pair(Name(FONT_NAME), self.type0_id);
        if self.logo.is_some() {
            resources.x_objects().pair(Name(LOGO_NAME), self.logo_id);
        }

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Map chars to big-endian glyph ids for Identity-H text showing.
    fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            let gid = self.face.glyph_index(c).unwrap_or(GlyphId(0)).0;
            self.max_gid = self.max_gid.max(gid);
            bytes.extend_from_slice(&gid.to_be_bytes());
        }
        bytes
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        let upem = self.face.units_per_em() as f32;
        text.chars()
            .map(|c| {
                let gid = self.face.glyph_index(c).unwrap_or(GlyphId(0));
                self.face.glyph_hor_advance(gid).unwrap_or(0) as f32
            })
            .sum::<f32>()
            * size
            / upem
    }

    fn draw_text(&mut self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let encoded = self.encode(text);
        content.begin_text();
        content.set_font(Name(FONT_NAME), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    /// Right-align text against `right_x`, the report-wide convention.
    fn draw_text_right(&mut self, content: &mut Content, right_x: f32, y: f32, size: f32, text: &str) {
        let x = right_x - self.text_width(text, size);
        self.draw_text(content, x, y, size, text);
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.5, 0.5, 0.5);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(&mut self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String]) {
        let mut x = self.margin;
        let size = self.font_size;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text_right(content, x + w - 4.0, y + 6.0, size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    fn draw_header_row(&mut self, content: &mut Content, y: f32, col_widths: &[f32], header: &[String]) {
        content.save_state();
        content.set_fill_rgb(0.83, 0.83, 0.83);
        content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
        content.fill_nonzero();
        content.restore_state();

        self.draw_row(content, y, col_widths, header);
    }

    fn draw_title_block(&mut self, content: &mut Content, title: &str) {
        let band_top = self.page_h - self.margin;

        if let Some(logo) = &self.logo {
            let disp_h = 40.0;
            let disp_w = disp_h * logo.width as f32 / logo.height as f32;
            content.save_state();
            content.transform([disp_w, 0.0, 0.0, disp_h, self.margin, band_top - disp_h]);
            content.x_object(Name(LOGO_NAME));
            content.restore_state();
        }

        let size = self.title_font_size;
        self.draw_text_right(
            content,
            self.page_w - self.margin,
            band_top - size,
            size,
            title,
        );
    }

    fn draw_page_number(&mut self, content: &mut Content, page: usize) {
        let pg = format!("Page {page}");
        let size = self.font_size;
        self.draw_text(content, self.page_w - self.margin - 60.0, 12.0, size, &pg);
    }

    /// Column widths for the table, scaled down if the clamped heuristic
    /// overflows the printable width.
    fn compute_col_widths(&self, matrix: &ReportMatrix) -> Vec<f32> {
        let available = self.page_w - 2.0 * self.margin;
        let bounds = WidthBounds {
            total: available,
            ..WidthBounds::default()
        };
        let mut w = widths::size(matrix, bounds);

        let total: f32 = w.iter().sum();
        if total > available {
            let scale = available / total;
            for v in &mut w {
                *v *= scale;
            }
        }
        w
    }

    /// Multipage table: title block on the first page, header band repeated
    /// on each page so no page shows orphaned data rows.
    fn write_table(&mut self, title: &str, matrix: &ReportMatrix) {
        let col_widths = self.compute_col_widths(matrix);

        let mut remaining: &[Vec<String>] = &matrix.rows;
        let mut page_idx = 1;
        let header = matrix.header.clone();

        loop {
            let mut content = self.new_page();

            let mut y = if page_idx == 1 {
                self.draw_title_block(&mut content, title);
                // Spacer between the title block and the table.
                self.page_h - self.margin - 65.0
            } else {
                self.page_h - self.margin - self.row_h
            };

            self.draw_page_number(&mut content, page_idx);
            self.draw_header_row(&mut content, y, &col_widths, &header);
            y -= self.row_h;

            let mut consumed = 0;
            for row in remaining {
                if y < self.margin {
                    break;
                }
                self.draw_row(&mut content, y, &col_widths, row);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    fn write_font(&mut self, font_data: &[u8]) {
        let upem = self.face.units_per_em() as f32;
        let scale = 1000.0 / upem;

        let mut type0 = self.pdf.type0_font(self.type0_id);
        type0.base_font(Name(b"ReportFont"));
        type0.encoding_predefined(Name(b"Identity-H"));
        type0.descendant_font(self.cid_id);
        type0.finish();

        let mut cid = self.pdf.cid_font(self.cid_id);
        cid.subtype(CidFontType::Type2);
        cid.base_font(Name(b"ReportFont"));
        cid.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid.font_descriptor(self.descriptor_id);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));

        // Identity-H makes CID == GID, so consecutive widths from zero up to
        // the highest glyph actually placed are enough.
        let widths: Vec<f32> = (0..=self.max_gid)
            .map(|gid| self.face.glyph_hor_advance(GlyphId(gid)).unwrap_or(0) as f32 * scale)
            .collect();
        cid.widths().consecutive(0, widths);
        cid.finish();

        let bbox = self.face.global_bounding_box();
        let mut descriptor = self.pdf.font_descriptor(self.descriptor_id);
        descriptor.name(Name(b"ReportFont"));
        descriptor.flags(FontFlags::NON_SYMBOLIC);
        descriptor.bbox(Rect::new(
            bbox.x_min as f32 * scale,
            bbox.y_min as f32 * scale,
            bbox.x_max as f32 * scale,
            bbox.y_max as f32 * scale,
        ));
        descriptor.italic_angle(0.0);
        descriptor.ascent(self.face.ascender() as f32 * scale);
        descriptor.descent(self.face.descender() as f32 * scale);
        descriptor.cap_height(
            self.face
                .capital_height()
                .map(|h| h as f32 * scale)
                .unwrap_or(700.0),
        );
        descriptor.stem_v(80.0);
        descriptor.font_file2(self.font_file_id);
        descriptor.finish();

        self.pdf.stream(self.font_file_id, font_data);
    }

    fn write_logo(&mut self) {
        if let Some(logo) = &self.logo {
            let mut image = self.pdf.image_xobject(self.logo_id, logo.data);
            image.width(logo.width as i32);
            image.height(logo.height as i32);
            if logo.gray {
                image.color_space().device_gray();
            } else {
                image.color_space().device_rgb();
            }
            image.bits_per_component(8);
            image.filter(Filter::DctDecode);
            image.finish();
        }
    }

    fn finish(mut self, font_data: &[u8]) -> Vec<u8> {
        self.write_font(font_data);
        self.write_logo();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        pages.finish();

        self.pdf.finish()
    }
}

/// Read (width, height, component count) from a JPEG's SOF marker.
fn jpeg_dimensions(data: &[u8]) -> Option<(u16, u16, u8)> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }

    let mut i = 2;
    while i + 9 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];

        // SOF0..SOF15 carry the frame header, except DHT/JPG/DAC.
        if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]);
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]);
            let components = data[i + 9];
            return Some((width, height, components));
        }

        let len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        i += 2 + len;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_sof_parsing() {
        // SOI, APP0 (empty), SOF0: 8-bit, 30 high, 80 wide, 3 components.
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x02];
        data.extend_from_slice(&[
            0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x1E, 0x00, 0x50, 0x03,
        ]);
        assert_eq!(jpeg_dimensions(&data), Some((80, 30, 3)));
    }

    #[test]
    fn rejects_non_jpeg_bytes() {
        assert_eq!(jpeg_dimensions(b"PNG not jpeg"), None);
        assert_eq!(jpeg_dimensions(&[]), None);
    }
}
