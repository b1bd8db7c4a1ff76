//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber shared by every
//! binary built on this framework.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable (default `info`)
//! - **Compact format** that hides module paths; actors log an `entity_type` field instead
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=actor_framework=debug,tower_http=debug cargo run
//! ```
//!
//! At `info` the store actor reports one line per save:
//!
//! ```text
//! INFO Saved entity_type="Product" id=5b1f... replaced=false size=3
//! ```
//!
//! `debug` adds the full entity payload and every lookup.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
