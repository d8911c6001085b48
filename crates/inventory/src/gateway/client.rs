//! # HTTP Gateway Client
//!
//! Repository-shaped access to a resource owned by another service. Every call serialises the
//! record to JSON, issues one HTTP request and maps the response:
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx | body decoded back into the record |
//! | 404 | [`GatewayError::NotFound`] |
//! | anything else | [`GatewayError::Transport`] with status and body |
//!
//! There are no retries and no timeouts beyond the HTTP client's defaults. Dropping the returned
//! future aborts the request.

use crate::gateway::GatewayError;
use crate::model::Category;
use async_trait::async_trait;
use entity_store::{entity_type, Lookup, StoreEntity, StoreError};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// A record reachable over HTTP at `{base_url}{PATH}` and `{base_url}{PATH}/{id}`.
pub trait Resource: StoreEntity + Serialize + DeserializeOwned {
    const PATH: &'static str;
}

impl Resource for Category {
    const PATH: &'static str = "/categories";
}

/// Remote create/update/get capability.
#[async_trait]
pub trait Gateway<T: Resource>: Send + Sync {
    async fn create(&self, record: T) -> Result<T, GatewayError>;

    /// Returns the record as echoed back by the owning service.
    async fn update(&self, id: T::Id, record: T) -> Result<T, GatewayError>;

    async fn get(&self, id: T::Id) -> Result<T, GatewayError>;
}

pub struct HttpGateway<T> {
    client: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpGateway<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> HttpGateway<T> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Share one connection pool between several gateways.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            _resource: PhantomData,
        }
    }

    fn collection_path(&self) -> String {
        T::PATH.to_string()
    }

    fn item_path(&self, id: T::Id) -> String {
        format!("{}/{}", T::PATH, id)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!(entity_type = entity_type::<T>(), path, "Remote not found");
            return Err(GatewayError::NotFound {
                resource: entity_type::<T>(),
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(entity_type = entity_type::<T>(), path, error = %e, "Failed to read error body");
                    format!("<unreadable body: {e}>")
                }
            };
            warn!(entity_type = entity_type::<T>(), path, status = status.as_u16(), %body, "Remote call failed");
            return Err(GatewayError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        debug!(entity_type = entity_type::<T>(), path, status = status.as_u16(), "Remote call ok");
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl<T: Resource> Gateway<T> for HttpGateway<T> {
    #[instrument(skip(self, record), fields(entity_type = entity_type::<T>()))]
    async fn create(&self, record: T) -> Result<T, GatewayError> {
        let path = self.collection_path();
        let request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&record);
        self.send(request, &path).await
    }

    #[instrument(skip(self, record), fields(entity_type = entity_type::<T>()))]
    async fn update(&self, id: T::Id, record: T) -> Result<T, GatewayError> {
        let path = self.item_path(id);
        let request = self
            .client
            .put(format!("{}{}", self.base_url, path))
            .json(&record);
        self.send(request, &path).await
    }

    #[instrument(skip(self), fields(entity_type = entity_type::<T>()))]
    async fn get(&self, id: T::Id) -> Result<T, GatewayError> {
        let path = self.item_path(id);
        let request = self.client.get(format!("{}{}", self.base_url, path));
        self.send(request, &path).await
    }
}

#[async_trait]
impl<T: Resource> Lookup<T::Id, T> for HttpGateway<T> {
    async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        Ok(<Self as Gateway<T>>::get(self, id).await?)
    }
}
