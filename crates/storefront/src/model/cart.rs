//! # Cart
//!
//! A customer's cart is a list of line items kept in insertion order, plus a visibility
//! flag for the cart drawer. All changes go through [`CartState::apply`], which is the
//! only writer; the cart actor calls it one action at a time.
//!
//! Invariants held by `apply`:
//! - at most one [`CartItem`] per id,
//! - a stored quantity is never zero (setting it to zero removes the line),
//! - the subtotal fits an order total (`u32`); a step that would exceed it is refused
//!   and leaves the cart unchanged.
use crate::cart_actor::CartError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for carts. One cart per customer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Whether a line is the plain dish or its combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Traditional,
    Combo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Menu-entry identity, e.g. `"skop"` or `"mogodu-pap"`.
    pub id: String,
    pub name: String,
    /// Unit price in whole Rand.
    pub price: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// An item as offered on the menu, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl NewCartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            kind,
        }
    }
}

/// Reducer steps for a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit, appending a new line if the id is not in the cart yet.
    AddItem(NewCartItem),
    /// Set a line's quantity; zero removes it. Unknown ids are ignored.
    UpdateQuantity { id: String, quantity: u32 },
    RemoveItem { id: String },
    /// Empty the cart. Leaves `is_open` alone.
    Clear,
    Toggle,
    SetOpen(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

impl CartState {
    /// Runs one reducer step. On error the state is left as it was.
    pub fn apply(&mut self, action: CartAction) -> Result<(), CartError> {
        let mut next = self.clone();
        let touched = next.step(action)?;
        if let Some(id) = touched {
            if next.subtotal() > u64::from(u32::MAX) {
                return Err(CartError::QuantityOverflow(id));
            }
        }
        *self = next;
        Ok(())
    }

    /// Applies the action in place, returning the id of a line whose quantity grew.
    fn step(&mut self, action: CartAction) -> Result<Option<String>, CartError> {
        match action {
            CartAction::AddItem(item) => {
                let id = item.id.clone();
                if let Some(existing) = self.items.iter_mut().find(|line| line.id == id) {
                    existing.quantity = existing
                        .quantity
                        .checked_add(1)
                        .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;
                } else {
                    self.items.push(CartItem {
                        id: item.id,
                        name: item.name,
                        price: item.price,
                        quantity: 1,
                        kind: item.kind,
                    });
                }
                Ok(Some(id))
            }
            CartAction::UpdateQuantity { id, quantity: 0 } | CartAction::RemoveItem { id } => {
                self.items.retain(|line| line.id != id);
                Ok(None)
            }
            CartAction::UpdateQuantity { id, quantity } => {
                match self.items.iter_mut().find(|line| line.id == id) {
                    Some(line) => {
                        line.quantity = quantity;
                        Ok(Some(id))
                    }
                    None => Ok(None),
                }
            }
            CartAction::Clear => {
                self.items.clear();
                Ok(None)
            }
            CartAction::Toggle => {
                self.is_open = !self.is_open;
                Ok(None)
            }
            CartAction::SetOpen(open) => {
                self.is_open = open;
                Ok(None)
            }
        }
    }

    /// Sum of price × quantity over every line.
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over every line.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }
}

/// One customer's cart as stored by the cart actor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait; its
/// custom action is a [`CartAction`] fed to [`CartState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub state: CartState,
}

/// Payload for opening a cart. Carts always start empty and closed.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;
