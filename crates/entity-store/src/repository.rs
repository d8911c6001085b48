//! # Repository & Lookup Traits
//!
//! The capability interfaces consumed by controllers. A controller never knows whether it talks
//! to an [`EntityStore`](crate::EntityStore), a [`MockRepository`](crate::mock::MockRepository)
//! or something remote; it only holds an `Arc<dyn Repository<T>>`.
//!
//! [`Lookup`] is the narrower read capability an enrichment controller needs from its parent:
//! a single `get` that returns whatever view the parent exposes.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use async_trait::async_trait;

/// CRUD capability over records of type `T`.
#[async_trait]
pub trait Repository<T: StoreEntity>: Send + Sync {
    /// Store `record` under a freshly assigned ID and return the stored copy.
    async fn create(&self, record: T) -> Result<T, StoreError>;

    /// Overwrite the mutable fields of record `id`.
    async fn update(&self, id: T::Id, record: T) -> Result<(), StoreError>;

    async fn get(&self, id: T::Id) -> Result<T, StoreError>;

    /// All records in insertion order. An empty collection is reported as [`StoreError::Empty`].
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// Remove record `id` and return it.
    async fn delete(&self, id: T::Id) -> Result<T, StoreError>;
}

/// Read-one capability used to resolve a parent reference.
///
/// # Example
///
/// ```rust
/// use entity_store::{Lookup, StoreError};
/// use async_trait::async_trait;
///
/// struct Colours;
///
/// #[async_trait]
/// impl Lookup<u32, String> for Colours {
///     async fn get(&self, id: u32) -> Result<String, StoreError> {
///         match id {
///             1 => Ok("red".to_string()),
///             _ => Err(StoreError::NotFound { entity: "Colour", key: format!("id={id}") }),
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     assert_eq!(Colours.get(1).await.unwrap(), "red");
///     assert!(Colours.get(2).await.unwrap_err().is_not_found());
/// }
/// ```
#[async_trait]
pub trait Lookup<Id, View>: Send + Sync
where
    Id: Send + 'static,
{
    async fn get(&self, id: Id) -> Result<View, StoreError>;
}
