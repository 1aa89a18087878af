//! Raw field values as entered by the user.

use serde::{Deserialize, Serialize};

use crate::types::{Country, ShippingField};

/// Unvalidated shipping form values.
///
/// Every field is kept as the string the user typed, including `country`,
/// which holds the raw selector value so that an empty or unknown selection
/// can still be represented and reported.
///
/// Missing keys deserialize to the [`Default`] value, so a request that omits
/// `country` gets the default country rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingFormInput {
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address: String,
    pub apartment: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub state: String,
}

impl Default for ShippingFormInput {
    fn default() -> Self {
        Self {
            country: Country::default().to_string(),
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            address: String::new(),
            apartment: String::new(),
            postal_code: String::new(),
            city: String::new(),
            phone: String::new(),
            state: String::new(),
        }
    }
}

impl ShippingFormInput {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::Country => &self.country,
            ShippingField::FirstName => &self.first_name,
            ShippingField::LastName => &self.last_name,
            ShippingField::Company => &self.company,
            ShippingField::Address => &self.address,
            ShippingField::Apartment => &self.apartment,
            ShippingField::PostalCode => &self.postal_code,
            ShippingField::City => &self.city,
            ShippingField::Phone => &self.phone,
            ShippingField::State => &self.state,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: ShippingField, value: impl Into<String>) {
        let slot = match field {
            ShippingField::Country => &mut self.country,
            ShippingField::FirstName => &mut self.first_name,
            ShippingField::LastName => &mut self.last_name,
            ShippingField::Company => &mut self.company,
            ShippingField::Address => &mut self.address,
            ShippingField::Apartment => &mut self.apartment,
            ShippingField::PostalCode => &mut self.postal_code,
            ShippingField::City => &mut self.city,
            ShippingField::Phone => &mut self.phone,
            ShippingField::State => &mut self.state,
        };
        *slot = value.into();
    }

    /// The selected country, if the selector holds a supported one.
    #[must_use]
    pub fn selected_country(&self) -> Option<Country> {
        Country::parse(&self.country).ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_netherlands() {
        let input = ShippingFormInput::default();
        assert_eq!(input.country, "Netherlands");
        assert_eq!(input.selected_country(), Some(Country::Netherlands));
        assert!(input.first_name.is_empty());
    }

    #[test]
    fn test_set_and_value_address_the_same_slot() {
        let mut input = ShippingFormInput::default();
        for field in ShippingField::ALL {
            input.set(field, format!("value for {field}"));
        }
        for field in ShippingField::ALL {
            assert_eq!(input.value(field), format!("value for {field}"));
        }
    }

    #[test]
    fn test_selected_country_unknown() {
        let mut input = ShippingFormInput::default();
        input.set(ShippingField::Country, "Atlantis");
        assert_eq!(input.selected_country(), None);
    }

    #[test]
    fn test_deserialize_fills_missing_keys() {
        let input: ShippingFormInput =
            serde_json::from_str(r#"{"firstName": "Jane", "postalCode": "1000AB"}"#).unwrap();
        assert_eq!(input.country, "Netherlands");
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.postal_code, "1000AB");
        assert_eq!(input.state, "");
    }
}
