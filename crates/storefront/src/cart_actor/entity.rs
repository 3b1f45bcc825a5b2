//! [`ActorEntity`] implementation for [`Cart`].

use super::CartError;
use crate::model::{Cart, CartAction, CartCreate, CartId, CartState};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartState;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            state: CartState::default(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs one reducer step and returns the resulting state.
    ///
    /// A refused step leaves the cart as it was; the table keeps serving other carts.
    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartState, Self::Error> {
        self.state.apply(action)?;
        Ok(self.state.clone())
    }
}
