//! Gateway service core: an HTTP client for resources owned by the catalog service and the
//! controller that fronts it.

pub mod client;
pub mod controller;
pub mod error;

pub use client::{Gateway, HttpGateway, Resource};
pub use controller::{CategoryGatewayController, GatewayController};
pub use error::GatewayError;
