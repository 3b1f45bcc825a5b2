//! Error types for the Order actor.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// A guarded advance was refused because the order is unpaid.
    #[error("{id} must be paid before it can move to {to}")]
    PaymentRequired { id: OrderId, to: OrderStatus },

    /// A guarded advance was attempted on a completed order.
    #[error("{0} is already completed")]
    AlreadyCompleted(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
