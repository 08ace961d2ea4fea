//! Generic single-owner store built on the actor model.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be held by an actor
//! - [`ResourceActor`] - Task that owns the record map and serializes every operation
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Failures of the actor plumbing itself
//!
//! # Testing
//!
//! See [`mock`] for a client that answers from scripted responses.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
