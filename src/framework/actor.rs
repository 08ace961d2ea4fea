//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the record map
//! and processes store requests sequentially, guaranteeing exclusive access to it.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the mailbox.
///
/// **Concurrency Model**:
/// Any number of clients may send requests at once, but the actor pulls them off
/// the mailbox one at a time and runs each to completion before looking at the
/// next. Every operation is therefore atomic with respect to every other one,
/// and writers to the same key are applied in mailbox order. No `Mutex` or
/// `RwLock` is needed for `store`: the task owns it exclusively.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client into every task that needs the store.
///
/// ```rust
/// use product_store::framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Update = String;
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     client.put(Note { id: 1, text: "hello".into() }).await.unwrap();
///     let note = client.get(1).await.unwrap().unwrap();
///     assert_eq!(note.text, "hello");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the mailbox. If the mailbox is full,
    ///   calls to the client wait until there is space. Must be at least 1.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_store::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Put { item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "Put");
                    if let Err(e) = item.on_put() {
                        warn!(entity_type, %id, error = %e, "Put rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let previous = self.store.insert(id.clone(), item);
                    info!(
                        entity_type,
                        %id,
                        replaced = previous.is_some(),
                        size = self.store.len(),
                        "Stored"
                    );
                    let _ = respond_to.send(Ok(previous));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        debug!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    let mut next = item.clone();
                    if let Err(e) = next.on_update(update) {
                        warn!(entity_type, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = next.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(Some(next)));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let removed = self.store.remove(&id);
                    if removed.is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Not found");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        label: String,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        label: String,
        value: i64,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("negative value: {0}")]
    struct NegativeValue(i64);

    impl ActorEntity for Counter {
        type Id = u32;
        type Update = CounterUpdate;
        type Error = NegativeValue;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn on_put(&self) -> Result<(), NegativeValue> {
            if self.value < 0 {
                return Err(NegativeValue(self.value));
            }
            Ok(())
        }

        // Assigns the label before validating so the scratch-copy commit is exercised.
        fn on_update(&mut self, update: CounterUpdate) -> Result<(), NegativeValue> {
            self.label = update.label;
            if update.value < 0 {
                return Err(NegativeValue(update.value));
            }
            self.value = update.value;
            Ok(())
        }
    }

    fn counter(id: u32, label: &str, value: i64) -> Counter {
        Counter {
            id,
            label: label.to_string(),
            value,
        }
    }

    #[tokio::test]
    async fn test_resource_actor_crud() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        // 1. Put
        let replaced = client.put(counter(1, "a", 1)).await.unwrap();
        assert!(replaced.is_none());

        // 2. Get
        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(counter(1, "a", 1)));

        // 3. Update
        let updated = client
            .update(
                1,
                CounterUpdate {
                    label: "b".into(),
                    value: 2,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated, Some(counter(1, "b", 2)));

        // 4. Delete
        let removed = client.delete(1).await.unwrap();
        assert_eq!(removed, Some(counter(1, "b", 2)));
        assert!(client.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_in_full() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        client.put(counter(7, "first", 1)).await.unwrap();
        let replaced = client.put(counter(7, "second", 9)).await.unwrap();

        assert_eq!(replaced, Some(counter(7, "first", 1)));
        assert_eq!(client.list().await.unwrap(), vec![counter(7, "second", 9)]);
    }

    #[tokio::test]
    async fn test_absent_key_is_not_an_error() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        assert!(client.get(42).await.unwrap().is_none());
        assert!(client.delete(42).await.unwrap().is_none());
        let updated = client
            .update(
                42,
                CounterUpdate {
                    label: "x".into(),
                    value: 1,
                },
            )
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_record_untouched() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        client.put(counter(1, "kept", 5)).await.unwrap();
        let result = client
            .update(
                1,
                CounterUpdate {
                    label: "lost".into(),
                    value: -1,
                },
            )
            .await;

        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.get(1).await.unwrap(), Some(counter(1, "kept", 5)));
    }

    #[tokio::test]
    async fn test_rejected_put_is_not_stored() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        let result = client.put(counter(3, "bad", -4)).await;

        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert!(client.get(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_client_fails_after_actor_stops() {
        let (actor, client) = ResourceActor::<Counter>::new(1);
        drop(actor);

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
