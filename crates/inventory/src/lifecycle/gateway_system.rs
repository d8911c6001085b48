use crate::gateway::{CategoryGatewayController, HttpGateway};
use crate::model::Category;
use std::sync::Arc;
use tracing::info;

/// Composition root of the gateway service.
pub struct GatewaySystem {
    pub categories: CategoryGatewayController,
}

impl GatewaySystem {
    /// `catalog_url` is the base URL of the catalog service, e.g. `http://localhost:8081`.
    pub fn new(catalog_url: &str) -> Self {
        let client = reqwest::Client::new();
        let categories = CategoryGatewayController::new(Arc::new(
            HttpGateway::<Category>::with_client(client, catalog_url),
        ));

        info!(catalog_url, "Gateway system ready");
        Self { categories }
    }
}
