//! # Checkout
//!
//! [`validation`] checks the form locally; [`submission`] turns a valid form and a
//! non-empty cart into one order write and hands back a [`Confirmation`](crate::confirmation::Confirmation).

pub mod submission;
pub mod validation;

pub use submission::*;
pub use validation::*;
