//! # Table Actor
//!
//! `ResourceActor<T>` owns every row of one table and processes requests one at a
//! time. Because a single task is the only writer, rows are replaced wholesale and no
//! reader can observe a half-applied write. After each successful write the actor
//! publishes a [`ChangeEvent`] so that views can refresh themselves.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ChangeEvent, ResourceRequest};
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Capacity of the change-notification channel. Slow subscribers see `Lagged` and
/// are expected to re-read the whole table anyway.
const CHANGE_BUFFER: usize = 64;

/// The server half of a table: the row store plus the request receiver.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    changes: broadcast::Sender<ChangeEvent<T::Id>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        let actor = Self {
            receiver,
            changes: changes.clone(),
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender, changes);
        (actor, client)
    }

    fn publish(&self, event: ChangeEvent<T::Id>) {
        // No subscribers is the normal case outside the admin board.
        let _ = self.changes.send(event);
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" instead of "storefront::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.publish(ChangeEvent::Created(id.clone()));
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let rows: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, rows = rows.len(), "List");
                    let _ = respond_to.send(Ok(rows));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Work on a copy so a failed hook leaves the stored row untouched.
                    let mut next = item.clone();
                    if let Err(e) = next.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), next.clone());
                    info!(entity_type, %id, "Updated");
                    self.publish(ChangeEvent::Updated(id));
                    let _ = respond_to.send(Ok(next));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        self.publish(ChangeEvent::Deleted(id));
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut next = item.clone();
                    match next.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), next);
                            info!(entity_type, %id, "Action ok");
                            self.publish(ChangeEvent::Updated(id));
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
