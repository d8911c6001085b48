//! # Enrichment
//!
//! An [`EnrichingController`] sits in front of a child repository and joins every record it reads
//! with the record's parent, producing a denormalized view. Writes pass straight through to the
//! child repository; enrichment happens only on read.
//!
//! ## Failure policy
//!
//! | Operation | Parent cannot be resolved |
//! |-----------|---------------------------|
//! | `get`     | fails with [`StoreError::Enrichment`], wrapping the parent's error |
//! | `get_all` | the record is dropped from the result, the call still succeeds |
//!
//! Each store lock is taken and released independently, so a join is not atomic across stores:
//! a parent deleted between the two reads makes the child fail enrichment.
//!
//! Controllers chain. Because an `EnrichingController` is itself a [`Lookup`] for its view type,
//! it can serve as the parent of another controller one level further down.

use crate::entity::{entity_type, StoreEntity};
use crate::error::StoreError;
use crate::repository::{Lookup, Repository};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// A record that references a parent and knows how to merge itself with the resolved parent.
pub trait Enrichable: StoreEntity {
    /// Identifier of the referenced parent.
    type ParentId: Copy + Debug + Send + Sync + 'static;

    /// What the parent lookup returns.
    type Parent: Send + Sync + 'static;

    /// The joined, read-only view.
    type View: Debug + Send + Sync + 'static;

    fn parent_id(&self) -> Self::ParentId;

    fn enrich(self, parent: Self::Parent) -> Self::View;
}

/// Controller that owns a child repository and reads parents through a [`Lookup`].
pub struct EnrichingController<T: Enrichable> {
    repo: Arc<dyn Repository<T>>,
    parents: Arc<dyn Lookup<T::ParentId, T::Parent>>,
}

impl<T: Enrichable> Clone for EnrichingController<T> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            parents: self.parents.clone(),
        }
    }
}

impl<T: Enrichable> EnrichingController<T> {
    pub fn new(
        repo: Arc<dyn Repository<T>>,
        parents: Arc<dyn Lookup<T::ParentId, T::Parent>>,
    ) -> Self {
        Self { repo, parents }
    }

    #[instrument(skip(self, record), fields(entity_type = entity_type::<T>()))]
    pub async fn create(&self, record: T) -> Result<T, StoreError> {
        self.repo.create(record).await
    }

    #[instrument(skip(self, record), fields(entity_type = entity_type::<T>()))]
    pub async fn update(&self, id: T::Id, record: T) -> Result<(), StoreError> {
        self.repo.update(id, record).await
    }

    #[instrument(skip(self), fields(entity_type = entity_type::<T>()))]
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        self.repo.delete(id).await
    }

    /// Read one record and join it with its parent.
    #[instrument(skip(self), fields(entity_type = entity_type::<T>()))]
    pub async fn get(&self, id: T::Id) -> Result<T::View, StoreError> {
        let record = self.repo.get(id).await?;
        let parent_id = record.parent_id();

        match self.parents.get(parent_id).await {
            Ok(parent) => Ok(record.enrich(parent)),
            Err(source) => {
                warn!(%id, ?parent_id, error = %source, "Enrichment failed");
                Err(StoreError::Enrichment {
                    entity: entity_type::<T>(),
                    id: id.to_string(),
                    source: Box::new(source),
                })
            }
        }
    }

    /// Read every record and join each with its parent, dropping the ones whose parent is gone.
    #[instrument(skip(self), fields(entity_type = entity_type::<T>()))]
    pub async fn get_all(&self) -> Result<Vec<T::View>, StoreError> {
        let records = self.repo.get_all().await?;
        let mut views = Vec::with_capacity(records.len());

        for record in records {
            let id = record.id();
            match self.parents.get(record.parent_id()).await {
                Ok(parent) => views.push(record.enrich(parent)),
                Err(error) => debug!(%id, %error, "Skipping record with unresolved parent"),
            }
        }

        Ok(views)
    }
}

#[async_trait]
impl<T: Enrichable> Lookup<T::Id, T::View> for EnrichingController<T> {
    async fn get(&self, id: T::Id) -> Result<T::View, StoreError> {
        EnrichingController::get(self, id).await
    }
}
