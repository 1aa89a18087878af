//! Shipping form field names.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`ShippingField`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shipping field: {0}")]
pub struct FieldNameError(pub String);

/// A named input in the shipping form.
///
/// Variants are declared in display order, and the derived `Ord` follows it,
/// so ordered collections keyed by field iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShippingField {
    Country,
    FirstName,
    LastName,
    Company,
    Address,
    Apartment,
    PostalCode,
    City,
    Phone,
    State,
}

impl ShippingField {
    /// Every field, in display order.
    pub const ALL: [Self; 10] = [
        Self::Country,
        Self::FirstName,
        Self::LastName,
        Self::Company,
        Self::Address,
        Self::Apartment,
        Self::PostalCode,
        Self::City,
        Self::Phone,
        Self::State,
    ];

    /// Form name used for HTML inputs and JSON keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Company => "company",
            Self::Address => "address",
            Self::Apartment => "apartment",
            Self::PostalCode => "postalCode",
            Self::City => "city",
            Self::Phone => "phone",
            Self::State => "state",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Country => "Country/Region",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Company => "Company",
            Self::Address => "Address",
            Self::Apartment => "Apartment",
            Self::PostalCode => "Postal code",
            Self::City => "City",
            Self::Phone => "Phone",
            Self::State => "State/Territory",
        }
    }

    /// Placeholder text for the input.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Company => "Company (optional)",
            Self::Apartment => "Apartment, suite, etc. (optional)",
            other => other.label(),
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ShippingField {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldNameError(s.to_owned()))
    }
}
