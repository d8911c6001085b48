//! # Inventory Services
//!
//! One binary, three services. Pick one with a subcommand:
//!
//! ```bash
//! inventory catalog                                   # :8081
//! inventory order                                     # :8082
//! inventory gateway --catalog-url http://localhost:8081  # :8083
//! ```
//!
//! Every flag can also come from the environment (`CATALOG_ADDR`, `ORDER_ADDR`, `GATEWAY_ADDR`,
//! `CATALOG_URL`); log verbosity comes from `RUST_LOG`.

use clap::Parser;
use entity_store::tracing::setup_tracing;
use inventory::config::{Cli, Command};
use inventory::http;
use inventory::lifecycle::{CatalogSystem, GatewaySystem, OrderSystem};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Catalog { addr } => {
            info!(%addr, "Starting catalog service");
            let system = Arc::new(CatalogSystem::new());
            http::serve(http::catalog::router(system), addr).await?;
        }
        Command::Order { addr } => {
            info!(%addr, "Starting order service");
            let system = Arc::new(OrderSystem::new());
            http::serve(http::order::router(system), addr).await?;
        }
        Command::Gateway { addr, catalog_url } => {
            info!(%addr, %catalog_url, "Starting gateway service");
            let system = Arc::new(GatewaySystem::new(&catalog_url));
            http::serve(http::gateway::router(system), addr).await?;
        }
    }

    info!("Service exited cleanly");
    Ok(())
}
