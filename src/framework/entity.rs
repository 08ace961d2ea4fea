//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that a record type must implement to be
//! held by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! record's key, its update payload, and its error type, and exposes validation hooks
//! that the actor runs before committing a write.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_put`] runs before a record is inserted or overwritten.
//!
//! The default implementation accepts every record.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// Keys are supplied by the caller (see [`ActorEntity::id`]); the actor never
/// generates identifiers on its own.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique key for this record (e.g., `String`, `u64`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to replace the mutable fields of an existing record.
    type Update: Send + Sync + Debug;

    /// The error type returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this record is stored under.
    fn id(&self) -> &Self::Id;

    /// Called before the record is stored by a `Put`. Returning an error
    /// rejects the write and leaves the store untouched.
    fn on_put(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to the record.
    ///
    /// The actor calls this on a scratch copy and only commits the copy when
    /// the hook succeeds, so an implementation may return early after a
    /// partial assignment without corrupting the stored record.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
