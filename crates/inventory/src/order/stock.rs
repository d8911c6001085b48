//! Stock is derived, never stored: it is the signed sum of a product's settled orders.

use crate::model::{Order, OrderStatus, OrderType};

/// Signed contribution of one order to stock. Only completed orders count.
///
/// Widened to `i128` so that neither negation nor summing a product's history can overflow.
pub fn stock_delta(order: &Order) -> i128 {
    if order.status != OrderStatus::Completed {
        return 0;
    }
    let quantity = i128::from(order.quantity);
    match order.order_type {
        OrderType::Buy | OrderType::Return => quantity,
        OrderType::Sale => -quantity,
    }
}

/// Fold a product's order history into its current stock level.
///
/// The fold is a plain sum, so the result does not depend on iteration order. Returns `None`
/// when the total does not fit in an `i64`.
pub fn current_stock<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Option<i64> {
    let total: i128 = orders.into_iter().map(stock_delta).sum();
    i64::try_from(total).ok()
}
