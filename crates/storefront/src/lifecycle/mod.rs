//! # System Lifecycle
//!
//! [`StorefrontSystem`] creates the three table actors, spawns them and wires the
//! services (checkout, order board, admin gate) on top of their clients.
//!
//! ## Shutdown
//!
//! 1. Drop every client, which closes the sending side of each actor's channel
//! 2. Each actor's `recv()` returns `None` and its loop ends
//! 3. `shutdown` awaits every actor task
//!
//! The tables do not depend on each other, so there is no ordering to respect. A
//! mounted [`OrderBoard`](crate::board::OrderBoard) holds an order client in its
//! listener task and has to be unmounted first.
//!
//! ## Tracing
//!
//! [`setup_tracing`] initialises logging once per process; see [`tracing`](self::tracing) for filters
//! and sample output.

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::setup_tracing;
