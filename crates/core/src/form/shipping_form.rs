//! The shipping form component state.
//!
//! ```text
//!            update_field()
//!              ┌──────┐
//!              ▼      │
//!          ┌─────────────┐  submit() invalid   ┌──────────────┐
//!   new ──►│   Editing   │────────────────────►│ show errors, │
//!          └─────────────┘◄────────────────────│ keep values  │
//!                 │                             └──────────────┘
//!                 │ submit() valid
//!                 ▼
//!        notify success, discard record, reset to Editing
//! ```

use super::data::ShippingFormData;
use super::errors::FieldErrors;
use super::input::ShippingFormInput;
use super::schema;
use crate::types::{Country, ShippingField};

/// Message shown after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Kind of user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
}

/// A transient notification raised by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notification {
    /// The notification raised after a valid submission.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE,
        }
    }
}

/// Outcome of a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The validated record. Nothing stores it; callers may log it.
    pub data: ShippingFormData,
    pub notification: Notification,
}

/// Shipping form state: current values plus the errors of the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingForm {
    values: ShippingFormInput,
    errors: FieldErrors,
}

impl ShippingForm {
    /// Creates an empty form with the default country selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with `values` and no errors.
    #[must_use]
    pub fn with_values(values: ShippingFormInput) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    #[must_use]
    pub const fn values(&self) -> &ShippingFormInput {
        &self.values
    }

    /// Errors from the last submit, including those of now hidden fields.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sets a field's value. Does not validate.
    pub fn update_field(&mut self, field: ShippingField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    #[must_use]
    pub fn value(&self, field: ShippingField) -> &str {
        self.values.value(field)
    }

    #[must_use]
    pub fn selected_country(&self) -> Option<Country> {
        self.values.selected_country()
    }

    /// Whether `field` is currently rendered.
    #[must_use]
    pub fn is_visible(&self, field: ShippingField) -> bool {
        schema::is_active(field, self.selected_country())
    }

    /// Rendered fields, in display order.
    pub fn visible_fields(&self) -> impl Iterator<Item = ShippingField> + '_ {
        ShippingField::ALL
            .into_iter()
            .filter(|field| self.is_visible(*field))
    }

    /// The error to display next to `field`.
    ///
    /// Hidden fields never display an error, so a state error from an
    /// Australian submit disappears once another country is selected.
    #[must_use]
    pub fn error(&self, field: ShippingField) -> Option<&str> {
        if self.is_visible(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Form heading, reflecting the raw country selection.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Shipping Information - {}", self.values.country.trim())
    }

    /// Validates the current values without changing the form.
    ///
    /// # Errors
    ///
    /// Returns the failing fields; see [`schema::validate`].
    pub fn validate(&self) -> Result<ShippingFormData, FieldErrors> {
        schema::validate(&self.values)
    }

    /// Submits the form.
    ///
    /// On success the record is returned with a success notification and the
    /// form resets to its initial state. On failure the new errors replace the
    /// previous ones and every entered value is kept.
    ///
    /// # Errors
    ///
    /// Returns the failing fields when validation does not pass.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        match self.validate() {
            Ok(data) => {
                *self = Self::new();
                Ok(Submission {
                    data,
                    notification: Notification::success(),
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
