//! Order service core: the product-bucketed order store, the validating controller and the
//! stock fold.

pub mod controller;
pub mod error;
pub mod stock;
pub mod store;

pub use controller::OrderController;
pub use error::OrderError;
pub use store::{OrderRepository, OrderStore};
