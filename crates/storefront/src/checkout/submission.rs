//! Turning a validated checkout into a stored order.

use super::validation::{validate, CheckoutForm, ValidCheckout, ValidationErrors};
use crate::cart_actor::CartError;
use crate::catalog::resolve_menu_item_id;
use crate::clients::{CartClient, MenuClient, OrderClient};
use crate::confirmation::Confirmation;
use crate::model::{
    CartId, CartState, ItemKind, MenuItem, OrderCreate, OrderItemDraft, OrderStatus,
};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// One or more form fields failed validation. Nothing was sent.
    #[error("Checkout form is invalid: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Could not read cart: {0}")]
    Cart(#[from] CartError),

    /// The cart's subtotal does not fit an order total.
    #[error("Order total of {0} is too large")]
    TotalOverflow(u64),

    /// The order write failed. The cart is left as it was so the customer can retry.
    #[error("Order submission failed: {0}")]
    Submission(#[from] OrderError),
}

/// Places orders from carts.
#[derive(Clone)]
pub struct CheckoutService {
    menu: MenuClient,
    orders: OrderClient,
    carts: CartClient,
}

impl CheckoutService {
    pub fn new(menu: MenuClient, orders: OrderClient, carts: CartClient) -> Self {
        Self {
            menu,
            orders,
            carts,
        }
    }

    /// Validates the form, stores the cart as an order and empties the cart.
    ///
    /// Validation happens before any request is sent. A failed cart clear after the
    /// order is stored is logged and does not fail the checkout.
    #[instrument(skip(self, form))]
    pub async fn submit(
        &self,
        cart_id: CartId,
        form: &CheckoutForm,
    ) -> Result<Confirmation, CheckoutError> {
        let checkout = validate(form).inspect_err(|errors| {
            warn!(%errors, "Checkout form rejected");
        })?;

        let cart = self.carts.state(cart_id).await?;
        if cart.is_empty() {
            warn!("Checkout attempted with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let catalog = match self.menu.list().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Menu lookup failed, order items will not reference the menu");
                Vec::new()
            }
        };

        let order = build_order(&checkout, &cart, &catalog)?;
        let order_id = self.orders.create_order(order).await.inspect_err(|e| {
            error!(error = %e, "Order submission failed");
        })?;

        let confirmation = Confirmation::new(order_id);
        info!(%order_id, path = %confirmation.path, "Order placed");

        if let Err(e) = self.carts.clear(cart_id).await {
            warn!(error = %e, "Order placed but cart could not be cleared");
        }

        Ok(confirmation)
    }
}

/// The order row for a validated checkout and a non-empty cart.
///
/// Each line is linked to the menu entry with the same name and price, if exactly
/// one exists.
pub fn build_order(
    checkout: &ValidCheckout,
    cart: &CartState,
    catalog: &[MenuItem],
) -> Result<OrderCreate, CheckoutError> {
    let subtotal = cart.subtotal();
    let total_amount =
        u32::try_from(subtotal).map_err(|_| CheckoutError::TotalOverflow(subtotal))?;

    let items = cart
        .items
        .iter()
        .map(|line| OrderItemDraft {
            menu_item_id: resolve_menu_item_id(catalog, &line.name, line.price),
            quantity: line.quantity,
            unit_price: line.price,
            with_combo: line.kind == ItemKind::Combo,
        })
        .collect();

    Ok(OrderCreate {
        customer_name: checkout.full_name.clone(),
        customer_phone: checkout.phone_number.clone(),
        total_amount,
        pickup_location: checkout.pickup_location,
        special_instructions: checkout.special_instructions.clone(),
        order_status: OrderStatus::Pending,
        payment_status: checkout.payment_method.initial_payment_status(),
        payment_method: checkout.payment_method,
        items,
    })
}
