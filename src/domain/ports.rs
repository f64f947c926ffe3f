use tokio::sync::mpsc;

use super::errors::DomainError;
use super::order::{Order, OrderDraft};

/// A notification from the order store's push feed.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A full point-in-time copy of the order list; the consumer replaces
    /// its view wholesale (never a delta).
    Snapshot(Vec<Order>),
    /// The subscription failed. Not fatal and not retried automatically.
    Error(String),
}

/// Subscription handle delivering [`StoreEvent`]s. Dropping the feed
/// unsubscribes.
pub struct OrderFeed {
    rx: mpsc::UnboundedReceiver<StoreEvent>,
}

impl OrderFeed {
    pub fn new(rx: mpsc::UnboundedReceiver<StoreEvent>) -> Self {
        Self { rx }
    }

    pub async fn next(&mut self) -> Option<StoreEvent> {
        self.rx.recv().await
    }

    /// Non-blocking variant; `None` when no event is currently queued.
    pub fn try_next(&mut self) -> Option<StoreEvent> {
        self.rx.try_recv().ok()
    }
}

/// The remote order data source, reduced to the two operations this system
/// needs: observe the full list and insert one order.
pub trait OrderStore: Send + Sync + 'static {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError>;

    /// Subscribes to the live order list. The current snapshot is delivered
    /// immediately, then a fresh one on every change.
    fn subscribe(&self) -> OrderFeed;
}

/// Hands a completed document to the host environment for persistence.
pub trait DocumentSink: Send + Sync + 'static {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), DomainError>;
}

impl<T: OrderStore> OrderStore for std::sync::Arc<T> {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        (**self).create(draft)
    }

    fn subscribe(&self) -> OrderFeed {
        (**self).subscribe()
    }
}

impl<T: DocumentSink> DocumentSink for std::sync::Arc<T> {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), DomainError> {
        (**self).save(bytes, filename)
    }
}
