//! # Order Client
//!
//! Writes to the `orders` table. Field writes (`set_order_status`,
//! `set_payment_status`, `mark_paid`) are unconditional; `advance` is the guarded
//! lifecycle step.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, PaymentStatus};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, ChangeEvent, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores an order and its items in one request.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            order_status: Some(status),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_payment_status(
        &self,
        id: OrderId,
        status: PaymentStatus,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            payment_status: Some(status),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn mark_paid(&self, id: OrderId) -> Result<Order, OrderError> {
        self.set_payment_status(id, PaymentStatus::Paid).await
    }

    /// Move the order one step along its lifecycle, refusing illegal steps.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Advance)
            .await
            .map_err(Self::map_error)
    }

    /// Live-update channel for the `orders` table.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent<OrderId>> {
        self.inner.subscribe()
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
