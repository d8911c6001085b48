//! # Order Store
//!
//! In-memory order storage keyed by product. Each product owns a bucket of orders in creation
//! order; lookups by order ID scan every bucket. One `RwLock` guards the buckets and the ID
//! sequence together.

use crate::model::{Order, OrderId, OrderStatus, ProductId};
use async_trait::async_trait;
use chrono::Utc;
use entity_store::{entity_type, StoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Storage capability the order controller depends on.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Assign an ID, stamp both timestamps and append to the product's bucket.
    async fn create(&self, order: Order) -> Result<Order, StoreError>;

    async fn get(&self, id: OrderId) -> Result<Order, StoreError>;

    /// Every order of every product, ordered by ID.
    async fn get_all(&self) -> Result<Vec<Order>, StoreError>;

    /// The product's bucket in creation order. A product with no orders is not found.
    async fn get_by_product_id(&self, product_id: ProductId) -> Result<Vec<Order>, StoreError>;

    /// Set the status and refresh `updated_at`.
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), StoreError>;
}

#[derive(Default)]
struct OrderState {
    buckets: HashMap<ProductId, Vec<Order>>,
    seq: u32,
}

impl OrderState {
    fn find(&self, id: OrderId) -> Option<&Order> {
        self.buckets.values().flatten().find(|order| order.id == id)
    }

    fn find_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.buckets
            .values_mut()
            .flatten()
            .find(|order| order.id == id)
    }
}

#[derive(Default)]
pub struct OrderStore {
    state: RwLock<OrderState>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn order_not_found(id: OrderId) -> StoreError {
    StoreError::NotFound {
        entity: entity_type::<Order>(),
        key: format!("id={id}"),
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create(&self, mut order: Order) -> Result<Order, StoreError> {
        debug!(?order, "Create");

        let mut state = self.state.write().await;
        state.seq += 1;
        order.id = OrderId(state.seq);
        order.created_at = Utc::now();
        order.updated_at = order.created_at;

        let bucket = state.buckets.entry(order.product_id).or_default();
        bucket.push(order.clone());

        info!(
            entity_type = "Order",
            id = %order.id,
            product_id = %order.product_id,
            bucket_size = bucket.len(),
            "Created"
        );
        Ok(order)
    }

    async fn get(&self, id: OrderId) -> Result<Order, StoreError> {
        let state = self.state.read().await;
        let order = state.find(id).cloned();
        debug!(entity_type = "Order", %id, found = order.is_some(), "Get");
        order.ok_or_else(|| order_not_found(id))
    }

    async fn get_all(&self) -> Result<Vec<Order>, StoreError> {
        let state = self.state.read().await;
        let mut orders: Vec<Order> = state.buckets.values().flatten().cloned().collect();
        debug!(entity_type = "Order", size = orders.len(), "GetAll");

        if orders.is_empty() {
            return Err(StoreError::empty::<Order>());
        }
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    async fn get_by_product_id(&self, product_id: ProductId) -> Result<Vec<Order>, StoreError> {
        let state = self.state.read().await;
        match state.buckets.get(&product_id) {
            Some(bucket) if !bucket.is_empty() => {
                debug!(entity_type = "Order", %product_id, size = bucket.len(), "GetByProductId");
                Ok(bucket.clone())
            }
            _ => {
                debug!(entity_type = "Order", %product_id, "No orders for product");
                Err(StoreError::NotFound {
                    entity: entity_type::<Order>(),
                    key: format!("productId={product_id}"),
                })
            }
        }
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.find_mut(id) {
            Some(order) => {
                let previous = order.status;
                order.status = status;
                order.updated_at = Utc::now();
                info!(entity_type = "Order", %id, %previous, %status, "Status updated");
                Ok(())
            }
            None => {
                warn!(entity_type = "Order", %id, "Not found");
                Err(order_not_found(id))
            }
        }
    }
}
