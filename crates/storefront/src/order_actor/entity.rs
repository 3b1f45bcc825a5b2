//! [`ActorEntity`] implementation for [`Order`].
//!
//! An order and its line items arrive in a single [`OrderCreate`], so the table never
//! holds an order without its items.

use super::{OrderAction, OrderError};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one item".to_string(),
            ));
        }
        if params.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(
                "order item quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(id, params, Utc::now()))
    }

    /// Writes the given fields as-is. No transition rules are checked here.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(status) = update.order_status {
            self.order_status = status;
        }
        if let Some(payment) = update.payment_status {
            self.payment_status = payment;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderStatus, Self::Error> {
        match action {
            OrderAction::Advance => {
                let next = self
                    .order_status
                    .next()
                    .ok_or(OrderError::AlreadyCompleted(self.id))?;
                if next.requires_payment() && !self.is_paid() {
                    return Err(OrderError::PaymentRequired {
                        id: self.id,
                        to: next,
                    });
                }
                self.order_status = next;
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItemDraft, PaymentMethod, PaymentStatus, PickupLocation};

    fn order(payment_status: PaymentStatus) -> Order {
        let params = OrderCreate {
            customer_name: "Lerato".into(),
            customer_phone: "+27814541020".into(),
            total_amount: 100,
            pickup_location: PickupLocation::Sinoville,
            special_instructions: None,
            order_status: OrderStatus::Pending,
            payment_status,
            payment_method: PaymentMethod::CashOnPickup,
            items: vec![OrderItemDraft {
                menu_item_id: None,
                quantity: 1,
                unit_price: 100,
                with_combo: true,
            }],
        };
        Order::from_create_params(OrderId(1), params).unwrap()
    }

    #[test]
    fn test_order_without_items_is_rejected() {
        let params = OrderCreate {
            customer_name: "Lerato".into(),
            customer_phone: "+27814541020".into(),
            total_amount: 0,
            pickup_location: PickupLocation::Annlin,
            special_instructions: None,
            order_status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::CashOnPickup,
            items: vec![],
        };
        let result = Order::from_create_params(OrderId(2), params);
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_advance_stops_before_collected_when_unpaid() {
        let mut order = order(PaymentStatus::Pending);

        assert_eq!(
            order.handle_action(OrderAction::Advance, &()).await,
            Ok(OrderStatus::Preparing)
        );
        assert_eq!(
            order.handle_action(OrderAction::Advance, &()).await,
            Ok(OrderStatus::Ready)
        );
        assert_eq!(
            order.handle_action(OrderAction::Advance, &()).await,
            Err(OrderError::PaymentRequired {
                id: OrderId(1),
                to: OrderStatus::Collected
            })
        );
        assert_eq!(order.order_status, OrderStatus::Ready);
    }

    #[tokio::test]
    async fn test_paid_order_advances_to_completed() {
        let mut order = order(PaymentStatus::Paid);
        for _ in 0..4 {
            order.handle_action(OrderAction::Advance, &()).await.unwrap();
        }
        assert_eq!(order.order_status, OrderStatus::Completed);
        assert_eq!(
            order.handle_action(OrderAction::Advance, &()).await,
            Err(OrderError::AlreadyCompleted(OrderId(1)))
        );
    }

    #[tokio::test]
    async fn test_raw_update_skips_transition_rules() {
        let mut order = order(PaymentStatus::Pending);
        order
            .on_update(
                OrderUpdate {
                    order_status: Some(OrderStatus::Collected),
                    payment_status: None,
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(order.order_status, OrderStatus::Collected);
        assert!(!order.is_paid());
    }
}
