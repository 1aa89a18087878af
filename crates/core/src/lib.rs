//! Shipping Form Core - form types, validation and state.
//!
//! This crate holds everything the shipping form knows about its data:
//! - [`types`] - The selectable [`Country`] set and the [`ShippingField`] names
//! - [`form`] - Raw input, the validation schema, the validated record and the
//!   [`ShippingForm`] component state
//!
//! # Architecture
//!
//! The core crate has no I/O, no HTTP and no rendering. The web crate feeds
//! request values into a [`ShippingForm`], submits it and renders the result.
//!
//! # Example
//!
//! ```
//! use shipping_form_core::{ShippingField, ShippingForm};
//!
//! let mut form = ShippingForm::new();
//! form.update_field(ShippingField::Country, "Australia");
//! form.update_field(ShippingField::FirstName, "Jane");
//!
//! let errors = form.submit().unwrap_err();
//! assert_eq!(
//!     errors.get(ShippingField::State),
//!     Some("State/territory is required")
//! );
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;

pub use form::*;
pub use types::*;
