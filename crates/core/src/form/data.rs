//! Validated shipping record.

use serde::Serialize;

use super::input::ShippingFormInput;
use super::schema;
use crate::types::{Country, ShippingField};

/// A shipping record that passed validation.
///
/// Values are kept as submitted. Optional fields left empty are `None`. `state` is only
/// ever present for countries that show the state field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFormData {
    pub country: Country,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ShippingFormData {
    /// Builds the record from input that already passed validation.
    pub(crate) fn from_validated(country: Country, input: &ShippingFormInput) -> Self {
        let state = if schema::is_active(ShippingField::State, Some(country)) {
            optional(&input.state)
        } else {
            None
        };

        Self {
            country,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            company: optional(&input.company),
            address: input.address.clone(),
            apartment: optional(&input.apartment),
            postal_code: input.postal_code.clone(),
            city: input.city.clone(),
            phone: input.phone.clone(),
            state,
        }
    }

    /// Recipient name as "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
