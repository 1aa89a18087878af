//! Per-field validation errors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::ShippingField;

/// Validation failures keyed by field.
///
/// Holds one message per failing field and nothing for fields that passed.
/// Iteration follows form display order. Serializes as a JSON object keyed by
/// form name, e.g. `{"firstName": "First name is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} shipping field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<ShippingField, String>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records `message` for `field`, keeping the first message if one exists.
    pub(crate) fn insert(&mut self, field: ShippingField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Returns the message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: ShippingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: ShippingField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates failing fields and their messages in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ShippingField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
