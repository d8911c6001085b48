//! # Inventory
//!
//! Domain and service layer of the inventory backend, built on the [`entity_store`] crate.
//!
//! ## Core Components
//!
//! - **[model]**: plain records (`Category`, `SubCategory`, `Product`, `Order`) and the joined
//!   read views.
//! - **[catalog]**: catalog controllers. Sub-category and product reads are enriched with their
//!   parents.
//! - **[order]**: the product-bucketed order store, the validating controller and the stock fold.
//! - **[gateway]**: HTTP client and controller for resources owned by the catalog service.
//! - **[http]**: axum routers for each service.
//! - **[lifecycle]**: composition roots that wire stores, controllers and clients together.
//! - **[config]**: command line and environment configuration.
//!
//! ## Testing
//!
//! Controllers are tested against [`entity_store::mock`] doubles or real in-memory stores;
//! `tests/` drives the routers over real HTTP.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order;
