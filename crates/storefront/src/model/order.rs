/// A submitted customer order together with its line items.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::MenuItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Kitchen-facing lifecycle stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Collected,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Collected,
        OrderStatus::Completed,
    ];

    /// The only status this one may advance to, or `None` once completed.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Collected),
            OrderStatus::Collected => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    /// Whether entering this status requires the order to be paid.
    pub fn requires_payment(self) -> bool {
        matches!(self, OrderStatus::Collected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Collected => "collected",
            OrderStatus::Completed => "completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => f.write_str("pending"),
            PaymentStatus::Paid => f.write_str("paid"),
        }
    }
}

/// How the customer intends to pay. Recorded only, never charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Online,
    CashOnPickup,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::CashOnPickup => "cash_on_pickup",
        }
    }

    /// Payment status an order starts with. Online orders count as paid at creation.
    pub fn initial_payment_status(self) -> PaymentStatus {
        match self {
            PaymentMethod::Online => PaymentStatus::Paid,
            PaymentMethod::CashOnPickup => PaymentStatus::Pending,
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(PaymentMethod::Online),
            "cash_on_pickup" => Ok(PaymentMethod::CashOnPickup),
            other => Err(format!("unknown payment method: {other:?}")),
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical collection points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupLocation {
    Montana,
    Sinoville,
    Annlin,
}

impl PickupLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            PickupLocation::Montana => "montana",
            PickupLocation::Sinoville => "sinoville",
            PickupLocation::Annlin => "annlin",
        }
    }
}

impl FromStr for PickupLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "montana" => Ok(PickupLocation::Montana),
            "sinoville" => Ok(PickupLocation::Sinoville),
            "annlin" => Ok(PickupLocation::Annlin),
            other => Err(format!("unknown pickup location: {other:?}")),
        }
    }
}

impl Display for PickupLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    /// Best-effort link back to the menu; `None` when no unique name+price match existed.
    pub menu_item_id: Option<MenuItemId>,
    pub quantity: u32,
    pub unit_price: u32,
    pub with_combo: bool,
}

/// A line item before its parent order has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDraft {
    pub menu_item_id: Option<MenuItemId>,
    pub quantity: u32,
    pub unit_price: u32,
    pub with_combo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    /// Total in whole Rand.
    pub total_amount: u32,
    pub pickup_location: PickupLocation,
    pub special_instructions: Option<String>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Builds the stored row, stamping every line with the new order's id.
    pub fn new(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        let items = params
            .items
            .into_iter()
            .map(|draft| OrderItem {
                order_id: id,
                menu_item_id: draft.menu_item_id,
                quantity: draft.quantity,
                unit_price: draft.unit_price,
                with_combo: draft.with_combo,
            })
            .collect();

        Self {
            id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            total_amount: params.total_amount,
            pickup_location: params.pickup_location,
            special_instructions: params.special_instructions,
            order_status: params.order_status,
            payment_status: params.payment_status,
            payment_method: params.payment_method,
            created_at,
            items,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// Payload for creating an order and all of its line items in one write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub total_amount: u32,
    pub pickup_location: PickupLocation,
    pub special_instructions: Option<String>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemDraft>,
}

/// Unguarded field writes. Transition rules live in
/// [`OrderAction::Advance`](crate::order_actor::OrderAction::Advance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain_ends_at_completed() {
        let mut status = OrderStatus::Pending;
        let mut path = vec![status];
        while let Some(next) = status.next() {
            path.push(next);
            status = next;
        }
        assert_eq!(path, OrderStatus::ALL.to_vec());
    }

    #[test]
    fn test_only_collected_requires_payment() {
        let gated: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.requires_payment())
            .collect();
        assert_eq!(gated, vec![OrderStatus::Collected]);
    }

    #[test]
    fn test_online_orders_start_paid() {
        assert_eq!(
            PaymentMethod::Online.initial_payment_status(),
            PaymentStatus::Paid
        );
        assert_eq!(
            PaymentMethod::CashOnPickup.initial_payment_status(),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_parse_enumerations() {
        assert_eq!("annlin".parse::<PickupLocation>(), Ok(PickupLocation::Annlin));
        assert!("Annlin".parse::<PickupLocation>().is_err());
        assert!("".parse::<PickupLocation>().is_err());
        assert_eq!(
            "cash_on_pickup".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CashOnPickup)
        );
        assert!("card".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_new_order_stamps_items_with_its_id() {
        let params = OrderCreate {
            customer_name: "Thabo".into(),
            customer_phone: "+27814541020".into(),
            total_amount: 85,
            pickup_location: PickupLocation::Montana,
            special_instructions: None,
            order_status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::CashOnPickup,
            items: vec![OrderItemDraft {
                menu_item_id: Some(MenuItemId(1)),
                quantity: 1,
                unit_price: 85,
                with_combo: false,
            }],
        };

        let order = Order::new(OrderId(9), params, Utc::now());
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].order_id, OrderId(9));
        assert!(!order.is_paid());
    }
}
