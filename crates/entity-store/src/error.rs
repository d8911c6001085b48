//! # Store Errors
//!
//! Common error type returned by stores, repositories and enrichment controllers.
//! Not-found comes in two shapes: scoped to a key ([`StoreError::NotFound`]) and scoped to the
//! whole collection ([`StoreError::Empty`]). Callers treat both the same way, see
//! [`StoreError::is_not_found`].

use crate::entity::{entity_type, StoreEntity};

/// Errors produced by the store layer and the controllers composed over it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("no {entity} records found")]
    Empty { entity: &'static str },

    /// A composite read could not resolve the parent of `entity` `id`.
    #[error("failed to enrich {entity} id={id}: {source}")]
    Enrichment {
        entity: &'static str,
        id: String,
        source: Box<StoreError>,
    },

    /// Failure raised by a lookup that is not backed by a local store (e.g. an HTTP gateway).
    #[error("remote lookup failed: {0}")]
    Remote(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Not-found error for the record of type `T` identified by `id`.
    pub fn not_found<T: StoreEntity>(id: T::Id) -> Self {
        StoreError::NotFound {
            entity: entity_type::<T>(),
            key: format!("id={id}"),
        }
    }

    /// Collection-level not-found for an empty store of `T`.
    pub fn empty<T>() -> Self {
        StoreError::Empty {
            entity: entity_type::<T>(),
        }
    }

    /// `true` for both key-scoped and collection-scoped not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Empty { .. })
    }
}
