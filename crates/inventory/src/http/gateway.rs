//! Routes of the gateway service. Each call is forwarded to the catalog service.

use crate::http::ApiError;
use crate::lifecycle::GatewaySystem;
use crate::model::{Category, CategoryId};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

type AppState = State<Arc<GatewaySystem>>;

pub fn router(system: Arc<GatewaySystem>) -> Router {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/:id", get(get_category).put(update_category))
        .with_state(system)
}

async fn create_category(
    State(system): AppState,
    body: Result<Json<Category>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(body) = body?;
    let created = system.categories.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_category(
    State(system): AppState,
    id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Category>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.categories.get(id).await?))
}

async fn update_category(
    State(system): AppState,
    id: Result<Path<CategoryId>, PathRejection>,
    body: Result<Json<Category>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    Ok(Json(system.categories.update(id, body).await?))
}
