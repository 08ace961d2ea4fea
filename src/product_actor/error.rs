//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
///
/// A missing product is not listed here: lookups report absence as `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The quantity is negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

