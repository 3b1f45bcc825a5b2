//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor), and the change notifications the actor
//! publishes after every successful write.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a table actor.
///
/// The variants map onto the operations a hosted table offers: insert (`Create`),
/// select by key (`Get`), select all (`List`), update by key (`Update`), delete by key
/// (`Delete`), plus a resource-specific `Action` for writes that don't fit the
/// row-update model (e.g. a cart reducer step).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// Notification published on the actor's broadcast channel after a write commits.
///
/// Subscribers only learn *which* row changed; they re-read whatever they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent<Id> {
    Created(Id),
    Updated(Id),
    Deleted(Id),
}

impl<Id> ChangeEvent<Id> {
    /// The id of the row the event refers to.
    pub fn id(&self) -> &Id {
        match self {
            ChangeEvent::Created(id) | ChangeEvent::Updated(id) | ChangeEvent::Deleted(id) => id,
        }
    }
}
