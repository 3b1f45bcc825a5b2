//! # Actor Framework
//!
//! Single-writer tables on top of Tokio. Each table is a [`ResourceActor`] task that owns
//! its rows outright and answers insert/select/update/delete/action requests sent
//! through a cloneable [`ResourceClient`]. Every committed write is announced on a
//! broadcast channel as a [`ChangeEvent`], which is what live views subscribe to.
//!
//! The storefront uses one table per resource (menu items, orders, carts). Because a
//! table processes its requests strictly one after another, there are no locks around
//! row state and readers only ever see whole rows.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the row type and its hooks
//! 2. **Runtime** ([`ResourceActor`]) - the message loop and the row store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ChangeEvent, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish {
//!     id: u32,
//!     name: String,
//!     available: bool,
//! }
//!
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] struct DishUpdate { available: Option<bool> }
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, available: true })
//!     }
//!
//!     async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(available) = update.available { self.available = available; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: DishAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let mut changes = client.subscribe();
//!     let id = client.create(DishCreate { name: "Skop".into() }).await.unwrap();
//!     assert_eq!(changes.recv().await.unwrap(), ChangeEvent::Created(id));
//!
//!     client.update(id, DishUpdate { available: Some(false) }).await.unwrap();
//!     let rows = client.list().await.unwrap();
//!     assert!(!rows[0].available);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to `new`, so tables can be
//! constructed first and wired together afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module scripts a table's replies so that code built on a
//! [`ResourceClient`] can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ChangeEvent, ResourceRequest, Response};
