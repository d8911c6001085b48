//! # Entity Store
//!
//! Building blocks for the in-memory persistence layer of the inventory services: a generic,
//! concurrency-safe store, the capability traits controllers program against, and a generic
//! enrichment controller that joins a record with its parent at read time.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`], [`Enrichable`]) - what a record is, how it is
//!    identified and how it joins with its parent.
//! 2. **Storage Layer** ([`EntityStore`]) - ordered records plus an ID sequence behind one
//!    `RwLock`.
//! 3. **Capability Layer** ([`Repository`], [`Lookup`]) - the interfaces controllers depend on,
//!    so a store, a mock or a remote gateway can stand behind the same controller.
//!
//! ```rust
//! use entity_store::{EntityStore, Repository, StoreEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Warehouse { id: u32, city: String }
//!
//! impl StoreEntity for Warehouse {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn assign_id(&mut self, id: u32) { self.id = id; }
//!     fn apply_update(&mut self, update: Warehouse) { self.city = update.city; }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = EntityStore::<Warehouse>::new();
//!     let created = store.create(Warehouse { id: 0, city: "Oslo".into() }).await.unwrap();
//!     store.update(created.id, Warehouse { id: 0, city: "Bergen".into() }).await.unwrap();
//!
//!     let all = store.get_all().await.unwrap();
//!     assert_eq!(all.len(), 1);
//!     assert_eq!(all[0].city, "Bergen");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Reads (`get`, `get_all`) share the lock; writes (`create`, `update`, `delete`) hold it
//!   exclusively.
//! - `get_all` returns an owned snapshot, so callers can iterate it without holding the lock.
//! - No operation spans two stores under one lock. Enriched reads lock the child store and then
//!   the parent store, one after the other.
//!
//! ## Testing
//!
//! The [`mock`] module provides scripted doubles for both capability traits.

pub mod enrich;
pub mod entity;
pub mod error;
pub mod mock;
pub mod repository;
pub mod store;
pub mod tracing;

pub use enrich::{Enrichable, EnrichingController};
pub use entity::{entity_type, StoreEntity};
pub use error::StoreError;
pub use repository::{Lookup, Repository};
pub use store::EntityStore;
