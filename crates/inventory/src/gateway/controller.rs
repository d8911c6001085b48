use crate::gateway::client::{Gateway, Resource};
use crate::gateway::GatewayError;
use crate::model::Category;
use std::sync::Arc;
use tracing::instrument;

/// Front-door controller of the gateway service. Forwards every call to the owning service.
pub struct GatewayController<T: Resource> {
    gateway: Arc<dyn Gateway<T>>,
}

pub type CategoryGatewayController = GatewayController<Category>;

impl<T: Resource> Clone for GatewayController<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<T: Resource> GatewayController<T> {
    pub fn new(gateway: Arc<dyn Gateway<T>>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, record: T) -> Result<T, GatewayError> {
        self.gateway.create(record).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: T::Id, record: T) -> Result<T, GatewayError> {
        self.gateway.update(id, record).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: T::Id) -> Result<T, GatewayError> {
        self.gateway.get(id).await
    }
}
