//! Routes of the catalog service.

use crate::http::ApiError;
use crate::lifecycle::CatalogSystem;
use crate::model::{
    Category, CategoryId, Product, ProductId, ProductInformation, SubCategory, SubCategoryDetails,
    SubCategoryId,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

type AppState = State<Arc<CatalogSystem>>;

pub fn router(system: Arc<CatalogSystem>) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route(
            "/subcategories",
            get(list_sub_categories).post(create_sub_category),
        )
        .route(
            "/subcategories/:id",
            get(get_sub_category)
                .put(update_sub_category)
                .delete(delete_sub_category),
        )
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(system)
}

// --- categories ---

async fn create_category(
    State(system): AppState,
    body: Result<Json<Category>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(body) = body?;
    let created = system.categories.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_categories(State(system): AppState) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(system.categories.get_all().await?))
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
    let Json(mut body) = body?;
    system.categories.update(id, body.clone()).await?;
    body.id = id;
    Ok(Json(body))
}

async fn delete_category(
    State(system): AppState,
    id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Category>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.categories.delete(id).await?))
}

// --- sub-categories ---

async fn create_sub_category(
    State(system): AppState,
    body: Result<Json<SubCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<SubCategory>), ApiError> {
    let Json(body) = body?;
    let created = system.sub_categories.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_sub_categories(
    State(system): AppState,
) -> Result<Json<Vec<SubCategoryDetails>>, ApiError> {
    Ok(Json(system.sub_categories.get_all().await?))
}

async fn get_sub_category(
    State(system): AppState,
    id: Result<Path<SubCategoryId>, PathRejection>,
) -> Result<Json<SubCategoryDetails>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.sub_categories.get(id).await?))
}

async fn update_sub_category(
    State(system): AppState,
    id: Result<Path<SubCategoryId>, PathRejection>,
    body: Result<Json<SubCategory>, JsonRejection>,
) -> Result<Json<SubCategory>, ApiError> {
    let Path(id) = id?;
    let Json(mut body) = body?;
    system.sub_categories.update(id, body.clone()).await?;
    body.id = id;
    Ok(Json(body))
}

async fn delete_sub_category(
    State(system): AppState,
    id: Result<Path<SubCategoryId>, PathRejection>,
) -> Result<Json<SubCategory>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.sub_categories.delete(id).await?))
}

// --- products ---

async fn create_product(
    State(system): AppState,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = body?;
    let created = system.products.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_products(
    State(system): AppState,
) -> Result<Json<Vec<ProductInformation>>, ApiError> {
    Ok(Json(system.products.get_all().await?))
}

async fn get_product(
    State(system): AppState,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<ProductInformation>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.products.get(id).await?))
}

async fn update_product(
    State(system): AppState,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(mut body) = body?;
    system.products.update(id, body.clone()).await?;
    body.id = id;
    Ok(Json(body))
}

async fn delete_product(
    State(system): AppState,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    Ok(Json(system.products.delete(id).await?))
}
