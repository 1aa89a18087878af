//! Shipping form validation schema.
//!
//! Each field carries a [`Requirement`]. Conditional requirements are
//! resolved against the country selected at validation time, never against
//! the outcome of a previous pass, so the same input always yields the same
//! result.
//!
//! | field        | requirement                       |
//! |--------------|-----------------------------------|
//! | `country`    | required, must be a [`Country`]   |
//! | `firstName`  | required                          |
//! | `lastName`   | required                          |
//! | `company`    | optional                          |
//! | `address`    | required                          |
//! | `apartment`  | optional                          |
//! | `postalCode` | required                          |
//! | `city`       | required                          |
//! | `phone`      | required                          |
//! | `state`      | required when country is Australia |

use super::data::ShippingFormData;
use super::errors::FieldErrors;
use super::input::ShippingFormInput;
use crate::types::{Country, ShippingField};

/// When a field must hold a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// May be left empty.
    Optional,
    /// Must always be filled in.
    Required,
    /// Shown and required only while the given country is selected;
    /// hidden and ignored otherwise.
    RequiredIn(Country),
}

/// Returns the requirement attached to `field`.
#[must_use]
pub const fn requirement(field: ShippingField) -> Requirement {
    match field {
        ShippingField::Company | ShippingField::Apartment => Requirement::Optional,
        ShippingField::State => Requirement::RequiredIn(Country::Australia),
        ShippingField::Country
        | ShippingField::FirstName
        | ShippingField::LastName
        | ShippingField::Address
        | ShippingField::PostalCode
        | ShippingField::City
        | ShippingField::Phone => Requirement::Required,
    }
}

/// Message reported when a required `field` is empty.
#[must_use]
pub const fn required_message(field: ShippingField) -> &'static str {
    match field {
        ShippingField::Country => "Country is required",
        ShippingField::FirstName => "First name is required",
        ShippingField::LastName => "Last name is required",
        ShippingField::Company => "Company is required",
        ShippingField::Address => "Address is required",
        ShippingField::Apartment => "Apartment is required",
        ShippingField::PostalCode => "Postal code is required",
        ShippingField::City => "City is required",
        ShippingField::Phone => "Phone is required",
        ShippingField::State => "State/territory is required",
    }
}

/// Whether `field` is shown and validated for the selected `country`.
///
/// With no valid country selected, conditional fields stay hidden.
#[must_use]
pub fn is_active(field: ShippingField, country: Option<Country>) -> bool {
    match requirement(field) {
        Requirement::RequiredIn(wanted) => country == Some(wanted),
        Requirement::Optional | Requirement::Required => true,
    }
}

/// Checks one field and returns the message of the first rule it violates.
///
/// Inactive fields always pass.
#[must_use]
pub fn check_field(field: ShippingField, value: &str, country: Option<Country>) -> Option<String> {
    if !is_active(field, country) {
        return None;
    }

    let blank = value.is_empty();
    match requirement(field) {
        Requirement::Optional => None,
        Requirement::Required | Requirement::RequiredIn(_) if blank => {
            Some(required_message(field).to_owned())
        }
        Requirement::Required | Requirement::RequiredIn(_) => {
            if field == ShippingField::Country && Country::parse(value).is_err() {
                Some(unsupported_country_message())
            } else {
                None
            }
        }
    }
}

/// Validates `input` against the schema.
///
/// # Errors
///
/// Returns [`FieldErrors`] with one message per failing field when any
/// active field violates its rule.
pub fn validate(input: &ShippingFormInput) -> Result<ShippingFormData, FieldErrors> {
    let country = input.selected_country();

    let mut errors = FieldErrors::new();
    for field in ShippingField::ALL {
        if let Some(message) = check_field(field, input.value(field), country) {
            errors.insert(field, message);
        }
    }

    match country {
        Some(country) if errors.is_empty() => {
            Ok(ShippingFormData::from_validated(country, input))
        }
        _ => Err(errors),
    }
}

fn unsupported_country_message() -> String {
    let names: Vec<&str> = Country::ALL.iter().map(|c| c.as_str()).collect();
    format!("Country must be one of: {}", names.join(", "))
}
