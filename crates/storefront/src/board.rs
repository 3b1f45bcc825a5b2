//! # Order Status Board
//!
//! The admin's live list of orders. While mounted, the board listens to the `orders`
//! table's change notifications and answers every one of them with a full re-read of
//! the table (orders newest first, line items joined with menu names). There is no
//! diffing; each snapshot replaces the previous one.
//!
//! ```text
//! orders table ──ChangeEvent──▶ listener task ──list()──▶ watch::Sender<Vec<BoardOrder>>
//!                                                              │
//!                                         OrderBoard::orders() / OrderBoard::watch()
//! ```
//!
//! `set_order_status` and `set_payment_status` write unconditionally. Which of them an
//! admin is offered is decided by [`available_actions`]; the guarded path is
//! [`OrderBoard::advance`].

use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{
    MenuItemId, Order, OrderId, OrderItem, OrderStatus, PaymentMethod, PaymentStatus,
};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("Order board is already mounted")]
    AlreadyMounted,
}

/// An order line with its menu name resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLine {
    /// `None` when the line has no menu link or the menu entry is gone.
    pub name: Option<String>,
    pub quantity: u32,
    pub unit_price: u32,
    pub with_combo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardOrder {
    pub order: Order,
    pub lines: Vec<BoardLine>,
}

impl BoardOrder {
    fn new(order: Order, names: &HashMap<MenuItemId, String>) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item: &OrderItem| BoardLine {
                name: item.menu_item_id.and_then(|id| names.get(&id).cloned()),
                quantity: item.quantity,
                unit_price: item.unit_price,
                with_combo: item.with_combo,
            })
            .collect();
        Self { order, lines }
    }
}

/// A button the admin view may offer for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoardAction {
    /// Move to the given status.
    Advance(OrderStatus),
    MarkPaid,
}

/// What the admin may do with an order right now.
///
/// The next status is only offered when it does not need payment or the order is paid.
/// Marking paid is only offered for unpaid cash-on-pickup orders.
pub fn available_actions(order: &Order) -> Vec<BoardAction> {
    let mut actions = Vec::new();
    if let Some(next) = order.order_status.next() {
        if !next.requires_payment() || order.is_paid() {
            actions.push(BoardAction::Advance(next));
        }
    }
    if order.payment_method == PaymentMethod::CashOnPickup
        && order.payment_status == PaymentStatus::Pending
    {
        actions.push(BoardAction::MarkPaid);
    }
    actions
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub collected: usize,
    pub completed: usize,
}

impl OrderStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total += 1;
            match order.order_status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Collected => stats.collected += 1,
                OrderStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }
}

pub struct OrderBoard {
    orders: OrderClient,
    menu: MenuClient,
    snapshot: Arc<watch::Sender<Vec<BoardOrder>>>,
    listener: Option<JoinHandle<()>>,
}

impl OrderBoard {
    pub fn new(orders: OrderClient, menu: MenuClient) -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self {
            orders,
            menu,
            snapshot: Arc::new(snapshot),
            listener: None,
        }
    }

    /// Loads the current orders and starts following changes.
    ///
    /// Mounting twice without an `unmount` in between is an error.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Result<(), BoardError> {
        if self.listener.is_some() {
            return Err(BoardError::AlreadyMounted);
        }

        // Subscribe first so that no write between the initial read and the listener is lost.
        let mut changes = self.orders.subscribe();
        self.refresh().await?;

        let orders = self.orders.clone();
        let menu = self.menu.clone();
        let snapshot = self.snapshot.clone();
        self.listener = Some(tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(event) => debug!(id = %event.id(), "Order changed"),
                    Err(RecvError::Lagged(skipped)) => debug!(skipped, "Change feed lagged"),
                    Err(RecvError::Closed) => break,
                }
                match fetch(&orders, &menu).await {
                    Ok(rows) => {
                        snapshot.send_replace(rows);
                    }
                    Err(e) => warn!(error = %e, "Order board refresh failed"),
                }
            }
        }));

        info!("Order board mounted");
        Ok(())
    }

    /// Stops following changes. Returns `false` if the board was not mounted.
    pub fn unmount(&mut self) -> bool {
        match self.listener.take() {
            Some(listener) => {
                listener.abort();
                info!("Order board unmounted");
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// The latest snapshot, newest order first.
    pub fn orders(&self) -> Vec<BoardOrder> {
        self.snapshot.borrow().clone()
    }

    /// A receiver that sees every new snapshot.
    pub fn watch(&self) -> watch::Receiver<Vec<BoardOrder>> {
        self.snapshot.subscribe()
    }

    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(self.snapshot.borrow().iter().map(|row| &row.order))
    }

    /// Re-reads every order and publishes the result.
    pub async fn refresh(&self) -> Result<Vec<BoardOrder>, BoardError> {
        let rows = fetch(&self.orders, &self.menu).await?;
        self.snapshot.send_replace(rows.clone());
        Ok(rows)
    }

    /// Writes a status without checking the lifecycle, then refreshes.
    #[instrument(skip(self))]
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), BoardError> {
        self.orders
            .set_order_status(id, status)
            .await
            .inspect_err(|e| warn!(error = %e, "Status update failed"))?;
        self.refresh().await?;
        Ok(())
    }

    /// Writes a payment status unconditionally, then refreshes.
    #[instrument(skip(self))]
    pub async fn set_payment_status(
        &self,
        id: OrderId,
        status: PaymentStatus,
    ) -> Result<(), BoardError> {
        self.orders
            .set_payment_status(id, status)
            .await
            .inspect_err(|e| warn!(error = %e, "Payment update failed"))?;
        self.refresh().await?;
        Ok(())
    }

    pub async fn mark_paid(&self, id: OrderId) -> Result<(), BoardError> {
        self.set_payment_status(id, PaymentStatus::Paid).await
    }

    /// Moves an order one step along its lifecycle, refusing illegal steps.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<OrderStatus, BoardError> {
        let status = self
            .orders
            .advance(id)
            .await
            .inspect_err(|e| warn!(error = %e, "Advance refused"))?;
        self.refresh().await?;
        Ok(status)
    }
}

impl Drop for OrderBoard {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn fetch(orders: &OrderClient, menu: &MenuClient) -> Result<Vec<BoardOrder>, BoardError> {
    let mut rows = orders.list().await?;
    let names: HashMap<MenuItemId, String> = menu
        .list()
        .await?
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect();

    rows.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    debug!(orders = rows.len(), "Fetched orders");
    Ok(rows
        .into_iter()
        .map(|order| BoardOrder::new(order, &names))
        .collect())
}
