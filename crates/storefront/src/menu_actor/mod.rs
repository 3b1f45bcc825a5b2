//! # Menu Actor
//!
//! Owns the `menu_items` table. The storefront only reads from it while customers
//! browse; writes come from seeding at startup and from availability changes.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::menu_actor;
//! use storefront::model::{MenuCategory, MenuItemCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .create_menu_item(MenuItemCreate::new("Skop", 85, MenuCategory::TraditionalDishes))
//!         .await?;
//!     let menu = client.fetch_available().await?;
//!     assert_eq!(menu.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
