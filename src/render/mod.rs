pub mod order_pdf;

pub use order_pdf::{render_order, RenderedDocument};
