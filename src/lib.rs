pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod pdf;
pub mod render;

pub use application::order_list::OrderListState;
pub use application::order_service::{sample_order_drafts, OrderService};
pub use domain::errors::DomainError;
pub use domain::format::{format_currency, format_date, status_color, Color};
pub use domain::order::{LineItem, Order, OrderDraft};
pub use domain::ports::{DocumentSink, OrderFeed, OrderStore, StoreEvent};
pub use infrastructure::file_sink::FileSystemSink;
pub use infrastructure::memory_store::InMemoryOrderStore;
pub use render::{render_order, RenderedDocument};
