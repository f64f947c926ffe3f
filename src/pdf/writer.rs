//! Assembles pages into a complete PDF byte stream.
//!
//! Output is fully deterministic: uncompressed content streams, a fixed
//! object layout (catalog, page tree, one Helvetica font, then a page and
//! content pair per page), no timestamps and no document IDs. Identical
//! drawing calls yield identical bytes.

use crate::domain::format::Color;

use super::content::{fmt_num, ContentStream};

const MM_TO_PT: f64 = 72.0 / 25.4;

/// A4 portrait.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

const PAGE_WIDTH_PT: f64 = PAGE_WIDTH_MM * MM_TO_PT;
const PAGE_HEIGHT_PT: f64 = PAGE_HEIGHT_MM * MM_TO_PT;

/// Average glyph advance as a fraction of the font size, used to center
/// short labels without embedding font metrics.
const APPROX_GLYPH_WIDTH: f64 = 0.5;

const SEPARATOR_LINE_WIDTH_PT: f64 = 0.57;

/// Stateful page builder addressed in millimetres from the top-left corner.
///
/// Font size and colors persist across drawing calls and across page breaks,
/// so callers set them once per visual group.
pub struct PdfWriter {
    pages: Vec<ContentStream>,
    font_size: f64,
    text_color: Color,
    fill_color: Color,
    draw_color: Color,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            pages: vec![ContentStream::new()],
            font_size: 12.0,
            text_color: Color::rgb(0, 0, 0),
            fill_color: Color::rgb(0, 0, 0),
            draw_color: Color::rgb(0, 0, 0),
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(ContentStream::new());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Draws text with its baseline at `(x, y)` on the current page.
    pub fn text(&mut self, text: &str, x: f64, y: f64) {
        let (size, color) = (self.font_size, self.text_color);
        self.current_page()
            .show_text(text, x * MM_TO_PT, flip_y(y), size, color);
    }

    /// Draws text horizontally centered on `cx`, using an approximate
    /// character width (sufficient for the short badge labels it serves).
    pub fn text_centered(&mut self, text: &str, cx: f64, y: f64) {
        let width = text.chars().count() as f64 * self.font_size * APPROX_GLYPH_WIDTH;
        let (size, color) = (self.font_size, self.text_color);
        self.current_page()
            .show_text(text, cx * MM_TO_PT - width / 2.0, flip_y(y), size, color);
    }

    /// Fills a rectangle given by its top-left corner, width and height.
    pub fn filled_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let color = self.fill_color;
        self.current_page().fill_rect(
            x * MM_TO_PT,
            flip_y(y + h),
            w * MM_TO_PT,
            h * MM_TO_PT,
            color,
        );
    }

    pub fn filled_rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let color = self.fill_color;
        self.current_page().fill_rounded_rect(
            x * MM_TO_PT,
            flip_y(y + h),
            w * MM_TO_PT,
            h * MM_TO_PT,
            r * MM_TO_PT,
            color,
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let color = self.draw_color;
        self.current_page().stroke_line(
            x1 * MM_TO_PT,
            flip_y(y1),
            x2 * MM_TO_PT,
            flip_y(y2),
            SEPARATOR_LINE_WIDTH_PT,
            color,
        );
    }

    fn current_page(&mut self) -> &mut ContentStream {
        self.pages.last_mut().expect("writer always has a page")
    }

    /// Serializes the document: header, objects in numeric order, xref table
    /// and trailer.
    pub fn finish(self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();

        out.extend_from_slice(b"%PDF-1.4\n");

        let kids = (0..self.pages.len())
            .map(|i| format!("{} 0 R", 4 + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");

        push_object(&mut out, &mut offsets, 1, "<< /Type /Catalog /Pages 2 0 R >>");
        push_object(
            &mut out,
            &mut offsets,
            2,
            &format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", self.pages.len()),
        );
        push_object(
            &mut out,
            &mut offsets,
            3,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );

        for (i, page) in self.pages.iter().enumerate() {
            let page_num = 4 + 2 * i;
            push_object(
                &mut out,
                &mut offsets,
                page_num,
                &format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                    fmt_num(PAGE_WIDTH_PT),
                    fmt_num(PAGE_HEIGHT_PT),
                    page_num + 1
                ),
            );
            push_stream_object(&mut out, &mut offsets, page_num + 1, page.as_str());
        }

        let xref_pos = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF\n",
                offsets.len() + 1
            )
            .as_bytes(),
        );

        out
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a top-left millimetre y coordinate to bottom-left points.
fn flip_y(y_mm: f64) -> f64 {
    PAGE_HEIGHT_PT - y_mm * MM_TO_PT
}

fn push_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, num: usize, body: &str) {
    offsets.push(out.len());
    out.extend_from_slice(format!("{num} 0 obj\n{body}\nendobj\n").as_bytes());
}

fn push_stream_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, num: usize, stream: &str) {
    offsets.push(out.len());
    out.extend_from_slice(
        format!(
            "{num} 0 obj\n<< /Length {} >>\nstream\n{stream}endstream\nendobj\n",
            stream.len()
        )
        .as_bytes(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_header_trailer_and_one_page() {
        let bytes = PdfWriter::new().finish();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn add_page_grows_the_page_tree() {
        let mut doc = PdfWriter::new();
        doc.add_page();
        assert_eq!(doc.page_count(), 2);
        let text = String::from_utf8(doc.finish()).unwrap();
        assert!(text.contains("/Kids [4 0 R 6 0 R] /Count 2"));
    }

    #[test]
    fn text_lands_on_the_current_page_with_flipped_y() {
        let mut doc = PdfWriter::new();
        doc.set_font_size(10.0);
        doc.text("top left", 20.0, 20.0);
        let text = String::from_utf8(doc.finish()).unwrap();
        // 20mm from the top of an A4 page = 785.20pt from the bottom.
        assert!(text.contains("1 0 0 1 56.69 785.20 Tm (top left) Tj"));
    }

    #[test]
    fn special_characters_are_escaped_in_output() {
        let mut doc = PdfWriter::new();
        doc.text("Order (draft)", 20.0, 20.0);
        let text = String::from_utf8(doc.finish()).unwrap();
        assert!(text.contains("(Order \\(draft\\)) Tj"));
    }

    #[test]
    fn identical_drawing_produces_identical_bytes() {
        let build = || {
            let mut doc = PdfWriter::new();
            doc.set_font_size(16.0);
            doc.set_text_color(Color::rgb(30, 64, 175));
            doc.text("Food Retailer", 20.0, 20.0);
            doc.set_fill_color(Color::rgb(59, 130, 246));
            doc.filled_rounded_rect(150.0, 38.0, 40.0, 8.0, 2.0);
            doc.finish()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn stream_length_matches_content() {
        let mut doc = PdfWriter::new();
        doc.text("x", 10.0, 10.0);
        let text = String::from_utf8(doc.finish()).unwrap();
        let start = text.find("stream\n").unwrap() + "stream\n".len();
        let end = text.find("endstream").unwrap();
        let declared: usize = text
            .split("/Length ")
            .nth(1)
            .unwrap()
            .split(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, end - start);
    }
}
