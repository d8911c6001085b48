//! Routes of the order service.

use crate::http::ApiError;
use crate::lifecycle::OrderSystem;
use crate::model::{Order, OrderId, OrderStatus, ProductId};
use crate::order::OrderError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

type AppState = State<Arc<OrderSystem>>;

pub fn router(system: Arc<OrderSystem>) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/status/:status", put(update_status))
        .route("/orders/:id/complete", put(complete_order))
        .route("/orders/:id/cancel", put(cancel_order))
        .route("/orders/product/:product_id", get(orders_by_product))
        .route("/orders/product/:product_id/stock", get(current_stock))
        .with_state(system)
}

/// A missing or malformed body is reported as a validation error of the order itself.
async fn create_order(
    State(system): AppState,
    body: Result<Json<Order>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(order) =
        body.map_err(|e| OrderError::Validation(format!("invalid order data: {e}")))?;
    let created = system.orders.create_order(order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_orders(State(system): AppState) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(system.orders.get_all_orders().await?))
}

async fn get_order(
    State(system): AppState,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.orders.get_order(id).await?))
}

async fn orders_by_product(
    State(system): AppState,
    product_id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let Path(product_id) = product_id?;
    Ok(Json(system.orders.get_orders_by_product_id(product_id).await?))
}

async fn current_stock(
    State(system): AppState,
    product_id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(product_id) = product_id?;
    let stock = system.orders.current_stock(product_id).await?;
    Ok(Json(json!({ "currentStock": stock })))
}

async fn update_status(
    State(system): AppState,
    path: Result<Path<(OrderId, String)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((id, status)) = path?;
    let status: OrderStatus = status.parse()?;
    system.orders.update_order_status(id, status).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn complete_order(
    State(system): AppState,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    system
        .orders
        .update_order_status(id, OrderStatus::Completed)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn cancel_order(
    State(system): AppState,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    system
        .orders
        .update_order_status(id, OrderStatus::Cancelled)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
