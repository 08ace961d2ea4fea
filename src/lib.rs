//! # Product Store
//!
//! > **A volatile, concurrency-safe product catalogue served over HTTP.**
//!
//! Records are `(id, name, quantity)` triples kept in memory only; the store is empty
//! again after every restart.
//!
//! ## 🏗️ Design Philosophy
//!
//! The record map is owned by a single Tokio task, the store actor. Request handlers
//! never touch the map: they send one message per operation and await the reply. The
//! actor handles messages strictly one after another, so:
//!
//! - every operation is atomic, and no reader sees a half-applied write;
//! - writes to one id are applied in a total order (mailbox order);
//! - an update's existence check and write happen in the same step, with no
//!   lost-update window between them.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Absence Is Not an Error
//! Looking up, updating, or deleting an unknown id yields `None` from the store and
//! [`Outcome::NotFound`](handler::Outcome::NotFound) from the handler, which the HTTP
//! layer reports as `200` with a not-found message. Only malformed input and internal
//! failures are errors.
//!
//! ### 2. Outcomes Before Status Codes
//! Handlers return a tagged [`Outcome`](handler::Outcome); status codes and JSON
//! bodies are chosen only at the edge, in [`api`].
//!
//! ### 3. Observability
//! `tracing` spans wrap every handled operation and the actor logs each mutation.
//! See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and its
//! [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The Records ([`model`], [`product_actor`])
//! [`Product`](model::Product) and its validation rules.
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) hides message passing behind typed calls.
//!
//! ### 4. The Protocol ([`handler`], [`api`])
//! Validation, dispatch, and outcome mapping for the five operations, plus the axum router.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Starts and stops the actor, parses configuration, sets up logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:9000
//! curl -X POST localhost:9000/add-product -d '{"id":"001","name":"Samsung Galaxy S1","quantity":10}'
//! curl 'localhost:9000/get-product?id=001'
//! ```

pub mod api;
pub mod clients;
pub mod framework;
pub mod handler;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
