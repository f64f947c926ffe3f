use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// A distributor purchase order as stored and transmitted.
///
/// Line items are deliberately denormalized into a single `items` field
/// holding a serialized JSON array; [`Order::line_items`] parses it on
/// demand. Field names follow the camelCase wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub distributor_name: String,
    pub order_date: String,
    pub delivery_date: String,
    /// Open enumeration: `Pending`, `Confirmed`, `Shipped`, `Delivered`, or
    /// anything else (rendered with a neutral color, never rejected).
    pub status: String,
    pub total_amount: f64,
    pub items: String,
}

/// An order as submitted for creation; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_number: String,
    pub distributor_name: String,
    pub order_date: String,
    pub delivery_date: String,
    pub status: String,
    pub total_amount: f64,
    pub items: String,
}

/// One product entry within an order's items list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
}

impl LineItem {
    /// Derived at display time, never persisted.
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.price
    }
}

impl Order {
    /// Parses the embedded items blob. A malformed blob is fatal to the
    /// operation consuming it; there is no partial-recovery path.
    pub fn line_items(&self) -> Result<Vec<LineItem>, DomainError> {
        parse_items(&self.items).map_err(|source| DomainError::MalformedItems {
            order_number: self.order_number.clone(),
            source,
        })
    }
}

pub fn parse_items(blob: &str) -> Result<Vec<LineItem>, serde_json::Error> {
    serde_json::from_str(blob)
}

pub fn serialize_items(items: &[LineItem]) -> String {
    serde_json::to_string(items).expect("line items always serialize to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apples() -> LineItem {
        LineItem {
            product: "Organic Apples".to_string(),
            quantity: 200.0,
            unit: "lbs".to_string(),
            price: 2.50,
        }
    }

    fn order_with_items(items: &str) -> Order {
        Order {
            id: "id-1".to_string(),
            order_number: "ORD-2024-001".to_string(),
            distributor_name: "Metro Grocery Supply".to_string(),
            order_date: "2024-12-01".to_string(),
            delivery_date: "2024-12-08".to_string(),
            status: "Confirmed".to_string(),
            total_amount: 15750.50,
            items: items.to_string(),
        }
    }

    #[test]
    fn items_round_trip() {
        let items = vec![
            apples(),
            LineItem {
                product: "Fresh Milk".to_string(),
                quantity: 100.0,
                unit: "gallons".to_string(),
                price: 4.25,
            },
        ];
        assert_eq!(parse_items(&serialize_items(&items)).unwrap(), items);
    }

    #[test]
    fn empty_items_list_parses() {
        assert_eq!(parse_items("[]").unwrap(), Vec::<LineItem>::new());
    }

    #[test]
    fn subtotal_is_quantity_times_price() {
        assert_eq!(apples().subtotal(), 500.0);
    }

    #[test]
    fn malformed_blob_is_a_fatal_parse_error() {
        let order = order_with_items("not valid json");
        let err = order.line_items().unwrap_err();
        match err {
            DomainError::MalformedItems { order_number, .. } => {
                assert_eq!(order_number, "ORD-2024-001");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wire_shape_uses_camel_case_and_keeps_items_as_a_string() {
        let order = order_with_items(&serialize_items(&[apples()]));
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["orderNumber"], "ORD-2024-001");
        assert_eq!(value["distributorName"], "Metro Grocery Supply");
        assert_eq!(value["totalAmount"], 15750.50);
        assert!(value["items"].is_string());
    }
}
