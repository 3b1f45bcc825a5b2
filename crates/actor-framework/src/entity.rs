//! # ActorEntity Trait
//!
//! The contract a row type implements to live in a [`ResourceActor`](crate::ResourceActor)
//! table. Menu items, orders and carts all go through the same loop; the trait's associated
//! types keep their payloads apart at compile time, so an `OrderCreate` can never reach the
//! menu table.
//!
//! The lifecycle hooks `on_create` and `on_delete` have no-op defaults.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A row type managed by a [`ResourceActor`](crate::ResourceActor).
///
/// Hooks are `async` so that they can consult other tables through the injected
/// `Context`, which is handed to `run()` rather than `new()` so that actors can be
/// wired together after they have all been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Primary key. Assigned by the actor from a monotonically increasing counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Insert payload.
    type Create: Send + Sync + Debug;

    /// Partial-update payload.
    type Update: Send + Sync + Debug;

    /// Resource-specific write operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum per table; every hook returns it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the row from its freshly assigned id and the insert payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the row is stored. An error aborts the insert.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the row is removed. An error aborts the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
