//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for the shared
//! `get`/`list`/`delete` calls and adds the table's own operations on top.

pub mod cart_client;
pub mod menu_client;
pub mod order_client;

pub use cart_client::*;
pub use menu_client::*;
pub use order_client::*;
