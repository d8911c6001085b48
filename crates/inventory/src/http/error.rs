use crate::gateway::GatewayError;
use crate::order::OrderError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use entity_store::StoreError;
use serde_json::json;

/// Any error a handler can return. Rendered as `{"error": code, "message": text}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The request body or a path segment could not be extracted.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("invalid path: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(e) => store_error_to_response(e),
            ApiError::Order(OrderError::Validation(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            ApiError::Order(e @ OrderError::StockOutOfRange(_)) => json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "stock_out_of_range",
                e.to_string(),
            ),
            ApiError::Order(OrderError::Store(e)) => store_error_to_response(e),
            ApiError::Gateway(e) => gateway_error_to_response(e),
            ApiError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, "bad_request", msg),
        }
    }
}

fn store_error_to_response(err: StoreError) -> Response {
    let message = err.to_string();
    match err {
        StoreError::NotFound { .. } | StoreError::Empty { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", message)
        }
        StoreError::Enrichment { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "enrichment_failed", message)
        }
        StoreError::Remote(_) => json_error(StatusCode::BAD_GATEWAY, "remote_error", message),
    }
}

fn gateway_error_to_response(err: GatewayError) -> Response {
    let message = err.to_string();
    match err {
        GatewayError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, "not_found", message),
        GatewayError::Transport { .. } | GatewayError::Http(_) => {
            json_error(StatusCode::BAD_GATEWAY, "transport_error", message)
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
