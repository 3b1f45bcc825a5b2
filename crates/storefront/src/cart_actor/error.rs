//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// A line's quantity or the cart's subtotal would exceed what an order can hold.
    #[error("Quantity of {0} is too large")]
    QuantityOverflow(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
