//! # Confirmation Surface
//!
//! After checkout the customer lands on `/order-confirmation?id=<n>`. The page shows
//! whatever id the query carries; it does not check that the order exists.

use crate::model::OrderId;
use serde::Serialize;
use url::form_urlencoded;

pub const CONFIRMATION_PATH: &str = "/order-confirmation";

/// Where a successful checkout sends the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub order_id: OrderId,
    pub path: String,
}

impl Confirmation {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            path: confirmation_path(order_id),
        }
    }
}

pub fn confirmation_path(order_id: OrderId) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", &order_id.0.to_string())
        .finish();
    format!("{CONFIRMATION_PATH}?{query}")
}

/// The confirmation page as rendered from a navigation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPage {
    /// The raw `id` value, shown verbatim.
    pub order_ref: String,
}

impl ConfirmationPage {
    /// Reads the `id` parameter from a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(|order_ref| Self { order_ref })
    }

    /// Like [`from_query`](Self::from_query), for a full `/order-confirmation?...` path.
    pub fn from_path(path: &str) -> Option<Self> {
        let (route, query) = path.split_once('?')?;
        if route != CONFIRMATION_PATH {
            return None;
        }
        Self::from_query(query)
    }

    /// The order id, when the reference is numeric.
    pub fn order_id(&self) -> Option<OrderId> {
        self.order_ref.parse::<u32>().ok().map(OrderId)
    }

    pub fn message(&self) -> String {
        format!(
            "Order #{} confirmed. Your order has been received. We'll call you at the number provided within 10 minutes.",
            self.order_ref
        )
    }
}
