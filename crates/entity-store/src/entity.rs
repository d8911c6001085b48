//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record type (Category, SubCategory, Product, …)
//! implements to be kept by the generic [`EntityStore`](crate::EntityStore). It names the ID type,
//! lets the store stamp identity on insert, and describes how an update overwrites the record.
//!
//! # Architecture Note
//! The store only ever deals with `T: StoreEntity`, so the locking, ID sequencing and
//! not-found handling are written *once* and reused for every entity type.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`] runs once, under the store's write lock, right after the ID
//!   is assigned. The default does nothing.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by an [`EntityStore`](crate::EntityStore).
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// The store-assigned identifier. Must be convertible from the `u32` sequence.
    type Id: Copy + Eq + Debug + Display + Send + Sync + From<u32> + 'static;

    /// The identifier currently carried by the record.
    fn id(&self) -> Self::Id;

    /// Stamp the store-assigned identifier on the record.
    fn assign_id(&mut self, id: Self::Id);

    /// Called after the ID is assigned, before the record is stored.
    fn on_create(&mut self) {}

    /// Overwrite every mutable field with the values carried by `update`.
    ///
    /// Implementations must leave the identifier untouched.
    fn apply_update(&mut self, update: Self);
}

/// Short type name used in logs and errors (e.g. `"Category"` instead of
/// `"inventory::model::category::Category"`).
pub fn entity_type<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
