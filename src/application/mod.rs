pub mod order_list;
pub mod order_service;
