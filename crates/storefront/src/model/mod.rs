//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod cart;
pub mod menu;
pub mod order;

pub use cart::*;
pub use menu::*;
pub use order::*;
