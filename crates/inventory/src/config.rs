//! Command line and environment configuration of the `inventory` binary.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "In-memory inventory services: catalog, orders and gateway")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve categories, sub-categories and products
    Catalog {
        /// Address to bind
        #[arg(long, env = "CATALOG_ADDR", default_value = "0.0.0.0:8081")]
        addr: SocketAddr,
    },

    /// Serve orders and stock levels
    Order {
        /// Address to bind
        #[arg(long, env = "ORDER_ADDR", default_value = "0.0.0.0:8082")]
        addr: SocketAddr,
    },

    /// Forward category calls to the catalog service
    Gateway {
        /// Address to bind
        #[arg(long, env = "GATEWAY_ADDR", default_value = "0.0.0.0:8083")]
        addr: SocketAddr,

        /// Base URL of the catalog service
        #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:8081")]
        catalog_url: String,
    },
}
