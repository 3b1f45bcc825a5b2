//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! process. `RUST_LOG` wins when set; otherwise the configured `log_level` applies.
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # full payloads, e.g. `create_order called order=OrderCreate { .. }`
//! RUST_LOG=storefront::board=debug cargo run
//! ```
//!
//! Table actors log with an `entity_type` field (`MenuItem`, `Order`, `Cart`) instead of a
//! module path, so a checkout reads roughly as:
//!
//! ```text
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO Action ok entity_type="Cart" id=cart_1
//! INFO submit{cart_id=CartId(1)}:create_order: Sending create_order to actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO submit{cart_id=CartId(1)}: Order placed order_id=order_1 path=/order-confirmation?id=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the table
        .compact()
        .init();
}
