//! Product-specific resource logic: validation hooks, errors, and actor construction.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
///
/// `mailbox_size` bounds the number of queued requests; senders wait for room
/// when it is full.
pub fn new(mailbox_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
