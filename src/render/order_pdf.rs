//! Renders one order as a paginated PDF document.
//!
//! The layout is fixed and purpose-built for the order record shape:
//! absolute millimetre coordinates on A4 portrait, no reflow. Given the same
//! order and the same generation date the output bytes are identical.

use chrono::NaiveDate;

use crate::domain::errors::DomainError;
use crate::domain::format::{
    format_currency, format_date, format_short_date, status_color, Color,
};
use crate::domain::order::Order;
use crate::pdf::PdfWriter;

const BRAND_BLUE: Color = Color::rgb(30, 64, 175);
const ACCENT_GREEN: Color = Color::rgb(16, 185, 129);
const WHITE: Color = Color::rgb(255, 255, 255);
const TEXT_DEFAULT: Color = Color::rgb(0, 0, 0);
const TEXT_MUTED: Color = Color::rgb(100, 100, 100);
const TEXT_FOOTER: Color = Color::rgb(150, 150, 150);
const SEPARATOR_GRAY: Color = Color::rgb(229, 231, 235);

const LEFT_MARGIN: f64 = 20.0;
const RIGHT_EDGE: f64 = 190.0;
const VALUE_COLUMN: f64 = 70.0;
const ROW_STEP: f64 = 8.0;
const ITEM_ROW_STEP: f64 = 7.0;

// Item table column positions.
const COL_PRODUCT: f64 = 25.0;
const COL_QTY: f64 = 100.0;
const COL_UNIT: f64 = 120.0;
const COL_PRICE: f64 = 140.0;
const COL_SUBTOTAL: f64 = 165.0;

/// Item rows past this cursor position overflow onto a fresh page.
const PAGE_BREAK_Y: f64 = 270.0;
const CONTINUATION_TOP_Y: f64 = 20.0;
const FOOTER_Y: f64 = 285.0;

/// A finished document ready for the sink.
#[derive(Debug)]
pub struct RenderedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Lays out `order` as a PDF. Fails fast with
/// [`DomainError::MalformedItems`] before producing any bytes if the items
/// blob does not parse.
///
/// `generated_on` only feeds the footer; it is injected so callers control
/// reproducibility.
pub fn render_order(order: &Order, generated_on: NaiveDate) -> Result<RenderedDocument, DomainError> {
    let items = order.line_items()?;
    let mut doc = PdfWriter::new();

    // Brand header
    doc.set_font_size(20.0);
    doc.set_text_color(BRAND_BLUE);
    doc.text("Food Retailer", LEFT_MARGIN, 20.0);
    doc.set_font_size(12.0);
    doc.set_text_color(TEXT_MUTED);
    doc.text("Distributor Portal", LEFT_MARGIN, 28.0);

    // Order title
    doc.set_font_size(16.0);
    doc.set_text_color(TEXT_DEFAULT);
    doc.text(&format!("Order {}", order.order_number), LEFT_MARGIN, 45.0);

    // Status badge, white text on the status color
    doc.set_font_size(10.0);
    doc.set_fill_color(status_color(&order.status));
    doc.filled_rounded_rect(150.0, 38.0, 40.0, 8.0, 2.0);
    doc.set_text_color(WHITE);
    doc.text_centered(&order.status, 170.0, 43.0);

    // General information
    doc.set_font_size(14.0);
    doc.set_text_color(TEXT_DEFAULT);
    doc.text("General Information", LEFT_MARGIN, 60.0);

    doc.set_font_size(10.0);
    let mut y = 70.0;
    info_row(&mut doc, "Order Number:", &order.order_number, y);
    y += ROW_STEP;
    info_row(&mut doc, "Distributor:", &order.distributor_name, y);
    y += ROW_STEP;
    info_row(&mut doc, "Order Date:", &format_date(&order.order_date), y);
    y += ROW_STEP;
    info_row(&mut doc, "Delivery Date:", &format_date(&order.delivery_date), y);
    y += ROW_STEP;
    doc.set_text_color(TEXT_MUTED);
    doc.text("Total Amount:", LEFT_MARGIN, y);
    doc.set_text_color(ACCENT_GREEN);
    doc.set_font_size(12.0);
    doc.text(&format_currency(order.total_amount), VALUE_COLUMN, y);

    // Items section title and header bar
    y += 15.0;
    doc.set_font_size(14.0);
    doc.set_text_color(TEXT_DEFAULT);
    doc.text("Order Items", LEFT_MARGIN, y);

    y += 10.0;
    doc.set_font_size(10.0);
    doc.set_fill_color(BRAND_BLUE);
    doc.filled_rect(LEFT_MARGIN, y - 5.0, 170.0, 8.0);
    doc.set_text_color(WHITE);
    doc.text("Product", COL_PRODUCT, y);
    doc.text("Qty", COL_QTY, y);
    doc.text("Unit", COL_UNIT, y);
    doc.text("Price", COL_PRICE, y);
    doc.text("Subtotal", COL_SUBTOTAL, y);

    // Footer goes on the first page regardless of how many pages the item
    // table spills onto.
    doc.set_font_size(8.0);
    doc.set_text_color(TEXT_FOOTER);
    doc.text(
        &format!("Generated on {}", format_short_date(generated_on)),
        LEFT_MARGIN,
        FOOTER_Y,
    );

    // Item rows, in input order. The header bar is not repeated on
    // continuation pages.
    y += ROW_STEP;
    doc.set_font_size(10.0);
    doc.set_text_color(TEXT_DEFAULT);
    for (idx, item) in items.iter().enumerate() {
        if y > PAGE_BREAK_Y {
            doc.add_page();
            y = CONTINUATION_TOP_Y;
        }

        doc.text(&item.product, COL_PRODUCT, y);
        doc.text(&item.quantity.to_string(), COL_QTY, y);
        doc.text(&item.unit, COL_UNIT, y);
        doc.text(&format_currency(item.price), COL_PRICE, y);
        doc.text(&format_currency(item.subtotal()), COL_SUBTOTAL, y);

        y += ITEM_ROW_STEP;

        if idx + 1 < items.len() {
            doc.set_draw_color(SEPARATOR_GRAY);
            doc.line(LEFT_MARGIN, y - 2.0, RIGHT_EDGE, y - 2.0);
        }
    }

    Ok(RenderedDocument {
        filename: format!("Order_{}.pdf", order.order_number),
        bytes: doc.finish(),
    })
}

fn info_row(doc: &mut PdfWriter, label: &str, value: &str, y: f64) {
    doc.set_text_color(TEXT_MUTED);
    doc.text(label, LEFT_MARGIN, y);
    doc.set_text_color(TEXT_DEFAULT);
    doc.text(value, VALUE_COLUMN, y);
}
