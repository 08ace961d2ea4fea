//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle management**: starting and shutting down the store actor
//! - **Configuration**: command-line options for the server binary
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ProductSystem`] - Owns the running store actor and its client
//! - [`Config`] - Bind address, mailbox size, demo seeding
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod product_system;
pub mod tracing;

pub use self::config::Config;
pub use self::product_system::{ProductSystem, SystemError};
pub use self::tracing::setup_tracing;
