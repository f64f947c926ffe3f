use chrono::{Local, NaiveDate};

use crate::domain::errors::DomainError;
use crate::domain::order::{serialize_items, LineItem, Order, OrderDraft};
use crate::domain::ports::{DocumentSink, OrderFeed, OrderStore};
use crate::render::render_order;

/// Use-case layer over the two ports: observe orders, seed demo data,
/// export an order as a PDF.
pub struct OrderService<S, D> {
    store: S,
    sink: D,
}

impl<S: OrderStore, D: DocumentSink> OrderService<S, D> {
    pub fn new(store: S, sink: D) -> Self {
        Self { store, sink }
    }

    pub fn subscribe(&self) -> OrderFeed {
        self.store.subscribe()
    }

    /// Inserts the four canned demonstration orders, one at a time.
    pub fn seed_sample_orders(&self) -> Result<Vec<Order>, DomainError> {
        sample_order_drafts()
            .into_iter()
            .map(|draft| self.store.create(draft))
            .collect()
    }

    /// Renders `order` with today's date in the footer and hands the result
    /// to the document sink. Returns the generated filename.
    pub fn export_order(&self, order: &Order) -> Result<String, DomainError> {
        self.export_order_on(order, Local::now().date_naive())
    }

    /// As [`Self::export_order`] but with an explicit generation date, so
    /// output is reproducible.
    pub fn export_order_on(
        &self,
        order: &Order,
        generated_on: NaiveDate,
    ) -> Result<String, DomainError> {
        let doc = render_order(order, generated_on)?;
        self.sink.save(&doc.bytes, &doc.filename)?;
        log::info!("exported order {} as {}", order.order_number, doc.filename);
        Ok(doc.filename)
    }
}

fn line(product: &str, quantity: f64, unit: &str, price: f64) -> LineItem {
    LineItem {
        product: product.to_string(),
        quantity,
        unit: unit.to_string(),
        price,
    }
}

fn draft(
    order_number: &str,
    distributor_name: &str,
    order_date: &str,
    delivery_date: &str,
    status: &str,
    total_amount: f64,
    items: &[LineItem],
) -> OrderDraft {
    OrderDraft {
        order_number: order_number.to_string(),
        distributor_name: distributor_name.to_string(),
        order_date: order_date.to_string(),
        delivery_date: delivery_date.to_string(),
        status: status.to_string(),
        total_amount,
        items: serialize_items(items),
    }
}

/// The four demonstration orders offered by the "Add Sample Orders" action.
pub fn sample_order_drafts() -> Vec<OrderDraft> {
    vec![
        draft(
            "ORD-2024-001",
            "Metro Grocery Supply",
            "2024-12-01",
            "2024-12-08",
            "Confirmed",
            15750.50,
            &[
                line("Organic Apples", 200.0, "lbs", 2.50),
                line("Fresh Milk", 100.0, "gallons", 4.25),
                line("Whole Wheat Bread", 150.0, "loaves", 3.50),
            ],
        ),
        draft(
            "ORD-2024-002",
            "Fresh Market Distributors",
            "2024-12-02",
            "2024-12-09",
            "Shipped",
            22450.75,
            &[
                line("Fresh Vegetables Mix", 500.0, "lbs", 3.00),
                line("Orange Juice", 80.0, "gallons", 6.50),
                line("Greek Yogurt", 200.0, "units", 1.99),
            ],
        ),
        draft(
            "ORD-2024-003",
            "Sunrise Foods Inc",
            "2024-12-03",
            "2024-12-10",
            "Pending",
            8900.00,
            &[
                line("Premium Coffee Beans", 50.0, "lbs", 12.00),
                line("Organic Honey", 30.0, "jars", 8.50),
                line("Maple Syrup", 40.0, "bottles", 15.00),
            ],
        ),
        draft(
            "ORD-2024-004",
            "Valley Fresh Produce",
            "2024-12-04",
            "2024-12-11",
            "Delivered",
            31200.25,
            &[
                line("Fresh Strawberries", 300.0, "lbs", 4.50),
                line("Organic Lettuce", 250.0, "heads", 2.25),
                line("Cherry Tomatoes", 180.0, "lbs", 3.75),
            ],
        ),
    ]
}
