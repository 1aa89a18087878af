//! Shipping destination countries.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Country`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryError {
    /// The input string is empty or whitespace.
    #[error("country cannot be empty")]
    Empty,
    /// The input names a country the form does not ship to.
    #[error("unsupported country: {0}")]
    Unsupported(String),
}

/// A country the shipping form accepts.
///
/// The selector offers exactly these options, in [`Country::ALL`] order.
/// New forms start with [`Country::Netherlands`] selected.
///
/// ## Examples
///
/// ```
/// use shipping_form_core::Country;
///
/// assert_eq!(Country::parse("Australia"), Ok(Country::Australia));
/// assert_eq!(Country::default(), Country::Netherlands);
/// assert!(Country::parse("France").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    #[default]
    Netherlands,
    Australia,
}

impl Country {
    /// Every selectable country, in display order.
    pub const ALL: [Self; 2] = [Self::Netherlands, Self::Australia];

    /// Returns the country name as shown in the selector and submitted by it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Netherlands => "Netherlands",
            Self::Australia => "Australia",
        }
    }

    /// Parse a `Country` from a selector value.
    ///
    /// Surrounding whitespace is ignored; the name itself must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Empty`] for blank input and
    /// [`CountryError::Unsupported`] for any other unknown name.
    pub fn parse(s: &str) -> Result<Self, CountryError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CountryError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| CountryError::Unsupported(s.to_owned()))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
