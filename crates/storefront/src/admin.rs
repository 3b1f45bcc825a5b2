//! # Admin Gate
//!
//! A shared-PIN check in front of the order board. A correct PIN yields an
//! [`AdminSession`]; holding one is all [`AdminGate::require`] looks for. This keeps
//! casual visitors out of the admin view and nothing more.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

/// PINs with fewer characters than this are refused without being compared.
pub const MIN_PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("Invalid PIN")]
    InvalidPin,

    #[error("Admin session required")]
    NotAuthenticated,
}

/// Proof that the PIN was entered correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub started_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AdminGate {
    pin: String,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

impl AdminGate {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    pub fn login(&self, pin: &str) -> Result<AdminSession, AdminError> {
        if pin.chars().count() < MIN_PIN_LENGTH || pin != self.pin {
            warn!("Admin login refused");
            return Err(AdminError::InvalidPin);
        }
        info!("Admin logged in");
        Ok(AdminSession {
            started_at: Utc::now(),
        })
    }

    /// Passes the session through if there is one.
    pub fn require(session: Option<&AdminSession>) -> Result<&AdminSession, AdminError> {
        session.ok_or(AdminError::NotAuthenticated)
    }
}
