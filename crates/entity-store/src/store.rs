//! # Generic Entity Store
//!
//! This module defines the `EntityStore`, the in-memory collection behind every catalog
//! repository. It owns the records of one entity type and the sequence that hands out IDs.

use crate::entity::{entity_type, StoreEntity};
use crate::error::StoreError;
use crate::repository::Repository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Lock-guarded, sequentially keyed collection of `T` records.
///
/// # Concurrency Model
///
/// A single `RwLock` guards both the records and the ID sequence:
///
/// * `get` / `get_all` take shared access and may run in parallel.
/// * `create` / `update` / `delete` take exclusive access, so ID assignment is linearizable:
///   N concurrent creates always produce IDs `1..=N` with no gaps or duplicates.
///
/// No method holds the lock across a call into another store.
///
/// # Implementation Details
///
/// Records are kept in insertion order in a `Vec` and looked up by linear scan. IDs come from a
/// `u32` counter that only moves forward, so an ID is never reused after a delete.
///
/// ```rust
/// use entity_store::{EntityStore, Repository, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
///
/// impl StoreEntity for Tag {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
///     fn assign_id(&mut self, id: u32) { self.id = id; }
///     fn apply_update(&mut self, update: Tag) { self.label = update.label; }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let store = EntityStore::<Tag>::new();
///     let tag = store.create(Tag { id: 0, label: "new".into() }).await.unwrap();
///     assert_eq!(tag.id, 1);
///     assert_eq!(store.get(1).await.unwrap().label, "new");
/// }
/// ```
pub struct EntityStore<T: StoreEntity> {
    state: RwLock<StoreState<T>>,
}

struct StoreState<T> {
    data: Vec<T>,
    seq: u32,
}

impl<T: StoreEntity> StoreState<T> {
    fn find(&self, id: T::Id) -> Option<usize> {
        self.data.iter().position(|record| record.id() == id)
    }
}

impl<T: StoreEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                data: Vec::new(),
                seq: 0,
            }),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.data.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for EntityStore<T> {
    async fn create(&self, mut record: T) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?record, "Create");

        let mut state = self.state.write().await;
        state.seq += 1;
        let id = T::Id::from(state.seq);
        record.assign_id(id);
        record.on_create();
        state.data.push(record.clone());

        info!(entity_type, %id, size = state.data.len(), "Created");
        Ok(record)
    }

    async fn update(&self, id: T::Id, record: T) -> Result<(), StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?record, "Update");

        let mut state = self.state.write().await;
        match state.find(id) {
            Some(index) => {
                state.data[index].apply_update(record);
                info!(entity_type, %id, "Updated");
                Ok(())
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(StoreError::not_found::<T>(id))
            }
        }
    }

    async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        let state = self.state.read().await;
        let record = state.find(id).map(|index| state.data[index].clone());
        debug!(entity_type, %id, found = record.is_some(), "Get");
        record.ok_or_else(|| StoreError::not_found::<T>(id))
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let entity_type = entity_type::<T>();
        let state = self.state.read().await;
        debug!(entity_type, size = state.data.len(), "GetAll");
        if state.data.is_empty() {
            return Err(StoreError::empty::<T>());
        }
        Ok(state.data.clone())
    }

    async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");

        let mut state = self.state.write().await;
        match state.find(id) {
            Some(index) => {
                // `remove` shifts the tail left, keeping the remaining records in order.
                let removed = state.data.remove(index);
                info!(entity_type, %id, size = state.data.len(), "Deleted");
                Ok(removed)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(StoreError::not_found::<T>(id))
            }
        }
    }
}
