//! # Cart Client
//!
//! The cart store's public surface: one method per reducer step, each returning the
//! cart's state after the step.
use crate::cart_actor::CartError;
use crate::model::{Cart, CartAction, CartCreate, CartId, CartState, NewCartItem};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(err) => *err,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Start a new, empty, closed cart.
    #[instrument(skip(self))]
    pub async fn open_cart(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(Self::map_error)
    }

    /// Current state of a cart.
    #[instrument(skip(self))]
    pub async fn state(&self, id: CartId) -> Result<CartState, CartError> {
        match self.inner.get(id).await.map_err(Self::map_error)? {
            Some(cart) => Ok(cart.state),
            None => Err(CartError::NotFound(id.to_string())),
        }
    }

    pub async fn add_item(&self, id: CartId, item: NewCartItem) -> Result<CartState, CartError> {
        self.dispatch(id, CartAction::AddItem(item)).await
    }

    pub async fn update_quantity(
        &self,
        id: CartId,
        item_id: impl Into<String>,
        quantity: u32,
    ) -> Result<CartState, CartError> {
        let action = CartAction::UpdateQuantity {
            id: item_id.into(),
            quantity,
        };
        self.dispatch(id, action).await
    }

    pub async fn remove_item(
        &self,
        id: CartId,
        item_id: impl Into<String>,
    ) -> Result<CartState, CartError> {
        self.dispatch(id, CartAction::RemoveItem { id: item_id.into() })
            .await
    }

    pub async fn clear(&self, id: CartId) -> Result<CartState, CartError> {
        self.dispatch(id, CartAction::Clear).await
    }

    pub async fn toggle(&self, id: CartId) -> Result<CartState, CartError> {
        self.dispatch(id, CartAction::Toggle).await
    }

    pub async fn set_open(&self, id: CartId, open: bool) -> Result<CartState, CartError> {
        self.dispatch(id, CartAction::SetOpen(open)).await
    }

    #[instrument(skip(self))]
    async fn dispatch(&self, id: CartId, action: CartAction) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_add_item_sends_reducer_step() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);
        let skop = NewCartItem::new("skop", "Skop", 85, ItemKind::Traditional);

        let expected = skop.clone();
        let task = tokio::spawn(async move { cart_client.add_item(CartId(1), skop).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        assert_eq!(action, CartAction::AddItem(expected.clone()));

        let mut state = CartState::default();
        state.apply(action).unwrap();
        responder.send(Ok(state)).unwrap();

        let state = task.await.unwrap().unwrap();
        assert_eq!(state.subtotal(), 85);
    }

    #[tokio::test]
    async fn test_state_of_unknown_cart_is_not_found() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get().return_ok(None);
        let cart_client = CartClient::new(mock.client());

        let result = cart_client.state(CartId(7)).await;
        assert_eq!(result, Err(CartError::NotFound("cart_7".to_string())));
        mock.verify();
    }
}
