//! Minimal deterministic PDF writer.
//!
//! ```text
//! drawing calls
//!     |
//! [PdfWriter]      mm/top-left API, font and color state
//!     |
//! [ContentStream]  per-page operator stream
//!     |
//! PDF bytes        fixed object layout, xref, trailer
//! ```

mod content;
mod writer;

pub use content::ContentStream;
pub use writer::{PdfWriter, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
