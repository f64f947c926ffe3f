//! Raw content-stream operators for one page.
//!
//! Coordinates here are PDF user space: points, origin at the bottom-left.
//! The [`super::writer::PdfWriter`] layer converts from the millimetre,
//! top-left system the renderer works in.

use crate::domain::format::Color;

/// Circle-to-Bézier constant for rounded corners.
const BEZIER_ARC: f64 = 0.5523;

pub(crate) fn fmt_num(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_color(c: Color) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        c.r as f64 / 255.0,
        c.g as f64 / 255.0,
        c.b as f64 / 255.0
    )
}

/// Escapes a string for a PDF literal string `( ... )`.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(ch),
        }
    }
    out
}

/// Accumulates the operator stream for a single page.
pub struct ContentStream {
    ops: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self { ops: String::new() }
    }

    pub fn show_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.ops.push_str(&format!(
            "BT /F1 {} Tf {} rg 1 0 0 1 {} {} Tm ({}) Tj ET\n",
            fmt_num(size),
            fmt_color(color),
            fmt_num(x),
            fmt_num(y),
            escape_text(text)
        ));
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ops.push_str(&format!(
            "{} rg {} {} {} {} re f\n",
            fmt_color(color),
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h)
        ));
    }

    pub fn fill_rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64, color: Color) {
        let k = r * BEZIER_ARC;
        let n = fmt_num;
        let ops = [
            format!("{} rg", fmt_color(color)),
            format!("{} {} m", n(x + r), n(y)),
            format!("{} {} l", n(x + w - r), n(y)),
            format!(
                "{} {} {} {} {} {} c",
                n(x + w - r + k),
                n(y),
                n(x + w),
                n(y + r - k),
                n(x + w),
                n(y + r)
            ),
            format!("{} {} l", n(x + w), n(y + h - r)),
            format!(
                "{} {} {} {} {} {} c",
                n(x + w),
                n(y + h - r + k),
                n(x + w - r + k),
                n(y + h),
                n(x + w - r),
                n(y + h)
            ),
            format!("{} {} l", n(x + r), n(y + h)),
            format!(
                "{} {} {} {} {} {} c",
                n(x + r - k),
                n(y + h),
                n(x),
                n(y + h - r + k),
                n(x),
                n(y + h - r)
            ),
            format!("{} {} l", n(x), n(y + r)),
            format!(
                "{} {} {} {} {} {} c",
                n(x),
                n(y + r - k),
                n(x + r - k),
                n(y),
                n(x + r),
                n(y)
            ),
            "f".to_string(),
        ];
        for op in ops {
            self.ops.push_str(&op);
            self.ops.push('\n');
        }
    }

    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.ops.push_str(&format!(
            "{} RG {} w {} {} m {} {} l S\n",
            fmt_color(color),
            fmt_num(width),
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        ));
    }

    pub fn as_str(&self) -> &str {
        &self.ops
    }
}

impl Default for ContentStream {
    fn default() -> Self {
        Self::new()
    }
}
