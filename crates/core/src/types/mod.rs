//! Core types for the shipping form.

pub mod country;
pub mod field;

pub use country::{Country, CountryError};
pub use field::{FieldNameError, ShippingField};
