//! # Order Controller
//!
//! Validates order input, then delegates to an [`OrderRepository`]. Current stock is derived on
//! every call from the product's order history (see [`stock`](crate::order::stock)).

use crate::model::{Order, OrderId, OrderStatus, ProductId};
use crate::order::stock::current_stock;
use crate::order::store::OrderRepository;
use crate::order::OrderError;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct OrderController {
    repo: Arc<dyn OrderRepository>,
}

impl OrderController {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Store a new order. Quantity and price must be positive; the status is always reset to
    /// [`OrderStatus::Pending`] whatever the caller sent.
    #[instrument(skip(self, order), fields(product_id = %order.product_id))]
    pub async fn create_order(&self, mut order: Order) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");

        if order.quantity <= 0 {
            return Err(OrderError::Validation(
                "quantity must be greater than zero".into(),
            ));
        }
        // Written negated so that NaN is rejected too.
        if !(order.price > 0.0) {
            return Err(OrderError::Validation(
                "price must be greater than zero".into(),
            ));
        }

        order.status = OrderStatus::Pending;
        Ok(self.repo.create(order).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        validate_order_id(id)?;
        Ok(self.repo.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.repo.get_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_orders_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Order>, OrderError> {
        validate_product_id(product_id)?;
        Ok(self.repo.get_by_product_id(product_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderError> {
        validate_order_id(id)?;
        Ok(self.repo.update_status(id, status).await?)
    }

    /// Signed stock level of `product_id`. A product without orders is reported as not found.
    #[instrument(skip(self))]
    pub async fn current_stock(&self, product_id: ProductId) -> Result<i64, OrderError> {
        let orders = self.repo.get_by_product_id(product_id).await?;
        let stock = current_stock(&orders).ok_or_else(|| {
            warn!(%product_id, orders = orders.len(), "Stock out of range");
            OrderError::StockOutOfRange(product_id)
        })?;
        debug!(%product_id, orders = orders.len(), stock, "Computed stock");
        Ok(stock)
    }
}

fn validate_order_id(id: OrderId) -> Result<(), OrderError> {
    if id.0 == 0 {
        return Err(OrderError::Validation("invalid order id".into()));
    }
    Ok(())
}

fn validate_product_id(id: ProductId) -> Result<(), OrderError> {
    if id.0 == 0 {
        return Err(OrderError::Validation("invalid product id".into()));
    }
    Ok(())
}
