use distributor_portal::{
    FileSystemSink, InMemoryOrderStore, OrderListState, OrderService,
};
use dotenvy::dotenv;
use std::env;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let export_dir = env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string());

    let store = InMemoryOrderStore::new();
    let sink = FileSystemSink::new(&export_dir);
    let service = OrderService::new(store, sink);

    let mut feed = service.subscribe();
    let mut list = OrderListState::new();

    service
        .seed_sample_orders()
        .expect("Failed to seed demonstration orders");

    // Drain the queued snapshots; the last one holds all seeded orders.
    while let Some(event) = feed.try_next() {
        list.apply(event);
    }

    log::info!("Loaded {} orders, exporting to {export_dir}/", list.orders.len());

    for order in &list.orders {
        match service.export_order(order) {
            Ok(filename) => log::info!("wrote {export_dir}/{filename}"),
            Err(e) => log::error!("failed to export {}: {e}", order.order_number),
        }
    }
}
