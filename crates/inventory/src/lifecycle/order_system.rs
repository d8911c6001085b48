use crate::order::{OrderController, OrderStore};
use std::sync::Arc;
use tracing::info;

/// Composition root of the order service.
pub struct OrderSystem {
    pub orders: OrderController,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    pub fn new() -> Self {
        let orders = OrderController::new(Arc::new(OrderStore::new()));
        info!("Order system ready");
        Self { orders }
    }
}
