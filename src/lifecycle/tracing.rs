//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable (defaults to `info`)
//! - **Compact format** without the crate/module prefix (`with_target(false)`); the
//!   store actor tags its events with `entity_type` instead
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final store size
//! - **Store Operations**: List, Get, Put, Update, Delete with the record id
//! - **Requests**: one span per handled operation, with the operation name and id
//! - **Errors**: rejected writes, undecodable payloads, and an unavailable store
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every store request, including payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, creating and updating one product prints:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO create:create_product: Stored entity_type="Product" id="001" replaced=false size=1
//! INFO update: Updated entity_type="Product" id="001"
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "update:update_product")
        .init();
}
