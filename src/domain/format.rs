//! Display formatting shared by the list view and the PDF renderer.
//!
//! All output is fixed to en-US conventions regardless of the host locale so
//! that generated documents are reproducible.

use chrono::NaiveDate;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` (or `rrggbb`) hex string. Malformed input yields
    /// black rather than an error.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::rgb(0, 0, 0);
        }
        let channel = |range| u8::from_str_radix(&hex[range], 16);
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Color::rgb(r, g, b),
            _ => Color::rgb(0, 0, 0),
        }
    }
}

const STATUS_PENDING: Color = Color::rgb(0xf5, 0x9e, 0x0b);
const STATUS_CONFIRMED: Color = Color::rgb(0x3b, 0x82, 0xf6);
const STATUS_SHIPPED: Color = Color::rgb(0x8b, 0x5c, 0xf6);
const STATUS_DELIVERED: Color = Color::rgb(0x10, 0xb9, 0x81);
const STATUS_UNKNOWN: Color = Color::rgb(0x6b, 0x72, 0x80);

/// Maps an order status to its badge color. Total over all strings: unknown
/// statuses get a neutral gray.
pub fn status_color(status: &str) -> Color {
    match status {
        "Pending" => STATUS_PENDING,
        "Confirmed" => STATUS_CONFIRMED,
        "Shipped" => STATUS_SHIPPED,
        "Delivered" => STATUS_DELIVERED,
        _ => STATUS_UNKNOWN,
    }
}

/// Renders a USD amount with a `$` prefix, thousands separators and exactly
/// two decimal places, e.g. `15750.5` -> `"$15,750.50"`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders an ISO `YYYY-MM-DD` date as e.g. `"Dec 1, 2024"`. Unparseable
/// input degrades to the literal `"Invalid Date"` instead of failing.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Short `M/D/YYYY` form used in the document footer.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
