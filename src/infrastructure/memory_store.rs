use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderDraft};
use crate::domain::ports::{OrderFeed, OrderStore, StoreEvent};

/// In-memory stand-in for the hosted order store.
///
/// Cheap to clone; all clones share the same order list and subscriber set.
/// Every mutation broadcasts a fresh full snapshot to live subscribers,
/// mirroring the snapshot-per-change contract of the real data source.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    orders: Mutex<Vec<Order>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<StoreEvent>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Vec<Order> {
        self.inner.orders.lock().expect("orders lock poisoned").clone()
    }

    fn broadcast(&self) {
        let snapshot = self.snapshot();
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .expect("subscribers lock poisoned");
        // Send prunes subscribers whose feed has been dropped.
        subscribers.retain(|tx| tx.send(StoreEvent::Snapshot(snapshot.clone())).is_ok());
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_number: draft.order_number,
            distributor_name: draft.distributor_name,
            order_date: draft.order_date,
            delivery_date: draft.delivery_date,
            status: draft.status,
            total_amount: draft.total_amount,
            items: draft.items,
        };

        self.inner
            .orders
            .lock()
            .expect("orders lock poisoned")
            .push(order.clone());
        log::debug!("created order {}", order.order_number);

        self.broadcast();
        Ok(order)
    }

    fn subscribe(&self) -> OrderFeed {
        let (tx, rx) = mpsc::unbounded_channel();
        // Initial snapshot is delivered immediately on subscription.
        let _ = tx.send(StoreEvent::Snapshot(self.snapshot()));
        self.inner
            .subscribers
            .lock()
            .expect("subscribers lock poisoned")
            .push(tx);
        OrderFeed::new(rx)
    }
}
