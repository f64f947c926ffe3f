use crate::domain::order::Order;
use crate::domain::ports::StoreEvent;

/// The live order-list projection the view layer reads from.
///
/// Starts in a loading state until the first feed event arrives. Snapshots
/// replace the list wholesale; a subscription error leaves whatever was
/// last shown in place and is logged, never fatal.
#[derive(Debug)]
pub struct OrderListState {
    pub loading: bool,
    pub orders: Vec<Order>,
}

impl OrderListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            orders: Vec::new(),
        }
    }

    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Snapshot(orders) => {
                self.orders = orders;
                self.loading = false;
            }
            StoreEvent::Error(message) => {
                log::error!("order subscription failed: {message}");
                self.loading = false;
            }
        }
    }
}

impl Default for OrderListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(n: &str) -> Order {
        Order {
            id: n.to_string(),
            order_number: n.to_string(),
            distributor_name: "Metro Grocery Supply".to_string(),
            order_date: "2024-12-01".to_string(),
            delivery_date: "2024-12-08".to_string(),
            status: "Pending".to_string(),
            total_amount: 1.0,
            items: "[]".to_string(),
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = OrderListState::new();
        assert!(state.loading);
        assert!(state.orders.is_empty());
    }

    #[test]
    fn snapshot_replaces_the_list_wholesale() {
        let mut state = OrderListState::new();
        state.apply(StoreEvent::Snapshot(vec![order("a"), order("b")]));
        assert!(!state.loading);
        assert_eq!(state.orders.len(), 2);

        // A later, smaller snapshot is not merged, it replaces.
        state.apply(StoreEvent::Snapshot(vec![order("c")]));
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders[0].order_number, "c");
    }

    #[test]
    fn subscription_error_clears_loading_but_keeps_the_list() {
        let mut state = OrderListState::new();
        state.apply(StoreEvent::Snapshot(vec![order("a")]));
        state.apply(StoreEvent::Error("connection reset".to_string()));
        assert!(!state.loading);
        assert_eq!(state.orders.len(), 1);
    }
}
