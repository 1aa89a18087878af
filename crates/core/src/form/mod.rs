//! Shipping form values, validation and component state.

pub mod data;
pub mod errors;
pub mod input;
pub mod schema;
pub mod shipping_form;

pub use data::ShippingFormData;
pub use errors::FieldErrors;
pub use input::ShippingFormInput;
pub use schema::{Requirement, validate};
pub use shipping_form::{
    Notification, NotificationKind, SUCCESS_MESSAGE, ShippingForm, Submission,
};
