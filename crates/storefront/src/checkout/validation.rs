//! Checkout form validation.
//!
//! Runs entirely locally and reports every failing field at once.

use crate::model::{PaymentMethod, PickupLocation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// The checkout form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone_number: String,
    pub pickup_location: String,
    pub special_instructions: Option<String>,
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    PhoneNumber,
    PickupLocation,
    PaymentMethod,
}

impl Field {
    /// The form field's name as the checkout surface knows it.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::PhoneNumber => "phoneNumber",
            Field::PickupLocation => "pickupLocation",
            Field::PaymentMethod => "paymentMethod",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A form that passed validation, normalised for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCheckout {
    pub full_name: String,
    /// Phone number with all whitespace removed.
    pub phone_number: String,
    pub pickup_location: PickupLocation,
    pub special_instructions: Option<String>,
    pub payment_method: PaymentMethod,
}

/// `+27` followed by exactly nine ASCII digits, once whitespace is stripped.
pub fn is_valid_sa_mobile(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.strip_prefix("+27") {
        Some(rest) => rest.len() == 9 && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

pub fn validate(form: &CheckoutForm) -> Result<ValidCheckout, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.add(Field::FullName, "Full name is required");
    }

    let phone_number: String = form
        .phone_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if phone_number.is_empty() {
        errors.add(Field::PhoneNumber, "Phone number is required");
    } else if !is_valid_sa_mobile(&phone_number) {
        errors.add(
            Field::PhoneNumber,
            "Please enter a valid South African phone number (+27xxxxxxxxx)",
        );
    }

    let pickup_location = form.pickup_location.parse::<PickupLocation>().ok();
    if pickup_location.is_none() {
        errors.add(Field::PickupLocation, "Please select a pickup location");
    }

    let payment_method = form.payment_method.parse::<PaymentMethod>().ok();
    if payment_method.is_none() {
        errors.add(Field::PaymentMethod, "Please select a payment method");
    }

    match (pickup_location, payment_method) {
        (Some(pickup_location), Some(payment_method)) if errors.is_empty() => Ok(ValidCheckout {
            full_name: full_name.to_string(),
            phone_number,
            pickup_location,
            special_instructions: form
                .special_instructions
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            payment_method,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Thabo Mokoena".into(),
            phone_number: "+27 81 454 1020".into(),
            pickup_location: "montana".into(),
            special_instructions: Some("  extra chakalaka ".into()),
            payment_method: "cash_on_pickup".into(),
        }
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_sa_mobile("+27814541020"));
        assert!(is_valid_sa_mobile("+27 81 454 1020"));
        assert!(!is_valid_sa_mobile("0814541020"));
        assert!(!is_valid_sa_mobile("+2781454102"));
        assert!(!is_valid_sa_mobile("+278145410201"));
        assert!(!is_valid_sa_mobile("+27-81454102"));
        assert!(!is_valid_sa_mobile(""));
    }

    #[test]
    fn test_valid_form_is_normalised() {
        let valid = validate(&form()).unwrap();
        assert_eq!(valid.phone_number, "+27814541020");
        assert_eq!(valid.pickup_location, PickupLocation::Montana);
        assert_eq!(valid.payment_method, PaymentMethod::CashOnPickup);
        assert_eq!(valid.special_instructions.as_deref(), Some("extra chakalaka"));
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = validate(&CheckoutForm::default()).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::FullName), Some("Full name is required"));
        assert_eq!(errors.get(Field::PhoneNumber), Some("Phone number is required"));
        assert!(errors.contains(Field::PickupLocation));
        assert!(errors.contains(Field::PaymentMethod));
    }

    #[test]
    fn test_empty_pickup_location_is_a_field_error() {
        let mut form = form();
        form.pickup_location = String::new();

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::PickupLocation));
        assert!(errors.to_string().starts_with("pickupLocation:"));
    }

    #[test]
    fn test_blank_name_and_bad_phone() {
        let mut form = form();
        form.full_name = "   ".into();
        form.phone_number = "0814541020".into();

        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::FullName, Field::PhoneNumber]);
    }

    #[test]
    fn test_online_payment_is_accepted() {
        let mut form = form();
        form.payment_method = "online".into();
        assert_eq!(validate(&form).unwrap().payment_method, PaymentMethod::Online);
    }
}
