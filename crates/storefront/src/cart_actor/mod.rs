//! # Cart Actor
//!
//! Holds one [`Cart`] row per customer session. Every cart change is a
//! [`CartAction`](crate::model::CartAction) performed as an actor action, so the
//! reducer is the single writer and callers always get back a whole state.
//! Carts are in-memory only and vanish on restart.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = CartClient::new(generic_client);

    (actor, client)
}
