//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every service binary.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`. When the variable is unset or unparsable the filter falls
//! back to `info`, which shows one line per write (`Created`, `Updated`, `Deleted`) plus every
//! `Not found` warning.
//!
//! ```bash
//! # Default: writes and warnings
//! cargo run -- catalog
//!
//! # Full payloads on every store call
//! RUST_LOG=debug cargo run -- order
//!
//! # Only the HTTP request spans
//! RUST_LOG=tower_http=debug cargo run -- gateway
//! ```
//!
//! The compact format hides the module path (`with_target(false)`); log lines identify the record
//! kind through the `entity_type` field instead:
//!
//! ```text
//! INFO Created entity_type="Category" id=1 size=1
//! WARN Not found entity_type="Product" id=9
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
