//! # Service Composition
//!
//! Each service is assembled exactly once at process start and then shared with its router as
//! an `Arc`. There is no global state: everything a handler can reach hangs off one of these
//! systems.
//!
//! | System | Owns | Depends on |
//! |--------|------|------------|
//! | [`CatalogSystem`] | category, sub-category and product stores | nothing |
//! | [`OrderSystem`] | the order store | nothing |
//! | [`GatewaySystem`] | an HTTP client | a running catalog service |
//!
//! Stores hold no background tasks, so there is nothing to shut down: dropping a system drops
//! its data.

pub mod catalog_system;
pub mod gateway_system;
pub mod order_system;

pub use catalog_system::CatalogSystem;
pub use gateway_system::GatewaySystem;
pub use order_system::OrderSystem;
