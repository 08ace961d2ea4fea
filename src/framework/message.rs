//! # Generic Messages
//!
//! The message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor's mailbox.
///
/// Each variant is one atomic store operation. The actor handles exactly one
/// request at a time, so no caller can observe a write halfway applied.
///
/// - **List**: point-in-time snapshot of every record.
/// - **Get**: the record stored under `id`, or `None`.
/// - **Put**: insert or overwrite in full; answers with the replaced record, if any.
/// - **Update**: check-and-replace under one key; `None` when the key is absent.
/// - **Delete**: remove and return the record; `None` when the key is absent.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Put {
        item: T,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}
