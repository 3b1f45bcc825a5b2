//! # Storefront
//!
//! The core of a small pickup-only food storefront: customers browse the menu, fill a
//! cart and check out; the kitchen follows orders on a live status board.
//!
//! Each resource lives in its own single-writer table from [`actor_framework`], so
//! every write to a cart or an order is applied whole and in arrival order.
//!
//! ## Module Tour
//!
//! ### Tables ([`menu_actor`], [`order_actor`], [`cart_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations and error types for the
//! three resources, with a `new()` factory each.
//!
//! ### Clients ([`clients`])
//! [`MenuClient`](clients::MenuClient), [`OrderClient`](clients::OrderClient) and
//! [`CartClient`](clients::CartClient) wrap the generic client with domain operations.
//!
//! ### Flows
//! - [`catalog`] groups dishes with their combos for display.
//! - [`checkout`] validates the form and places the order.
//! - [`confirmation`] is where a customer lands afterwards.
//! - [`board`] is the admin's live order list; [`admin`] guards it with a PIN.
//!
//! ### Runtime ([`lifecycle`], [`config`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) starts and stops the tables;
//! [`StorefrontConfig`](config::StorefrontConfig) holds settings and the startup menu.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p storefront
//! STOREFRONT_CONFIG=storefront.toml cargo run -p storefront
//! ```

pub mod admin;
pub mod board;
pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod confirmation;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
