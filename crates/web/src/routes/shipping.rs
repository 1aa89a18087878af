//! Shipping form route handlers.
//!
//! The form posts back to the server, which validates it with
//! [`ShippingForm::submit`] and re-renders the page: with a success toast and a
//! fresh form when the record is valid, or with the entered values and inline
//! errors when it is not. Valid records are logged and discarded.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Query, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use shipping_form_core::{
    Country, FieldErrors, Notification, ShippingField, ShippingForm, ShippingFormData,
    ShippingFormInput,
};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};

// =============================================================================
// View models
// =============================================================================

/// One rendered text input.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    /// Rendered side by side with its neighbour.
    pub half_width: bool,
}

impl FieldView {
    fn new(form: &ShippingForm, field: ShippingField) -> Self {
        Self {
            name: field.name(),
            label: field.label(),
            placeholder: field.placeholder(),
            value: form.value(field).to_owned(),
            error: form.error(field).map(str::to_owned),
            half_width: matches!(
                field,
                ShippingField::FirstName
                    | ShippingField::LastName
                    | ShippingField::PostalCode
                    | ShippingField::City
            ),
        }
    }
}

/// One `<option>` of the country selector.
#[derive(Debug, Clone)]
pub struct CountryOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Full shipping form page.
#[derive(Template, WebTemplate)]
#[template(path = "shipping/index.html")]
pub struct ShippingPageTemplate {
    pub heading: String,
    pub countries: Vec<CountryOption>,
    pub country_error: Option<String>,
    /// Visible inputs other than the country selector and the state field.
    pub fields: Vec<FieldView>,
    pub state_field: Option<FieldView>,
    pub toast: Option<&'static str>,
}

impl ShippingPageTemplate {
    fn new(form: &ShippingForm, notification: Option<Notification>) -> Self {
        let selected = form.value(ShippingField::Country).trim();
        let countries = Country::ALL
            .into_iter()
            .map(|country| CountryOption {
                value: country.as_str(),
                selected: country.as_str() == selected,
            })
            .collect();

        let fields = form
            .visible_fields()
            .filter(|field| !matches!(field, ShippingField::Country | ShippingField::State))
            .map(|field| FieldView::new(form, field))
            .collect();

        let state_field = form
            .is_visible(ShippingField::State)
            .then(|| FieldView::new(form, ShippingField::State));

        Self {
            heading: form.heading(),
            countries,
            country_error: form.error(ShippingField::Country).map(str::to_owned),
            fields,
            state_field,
            toast: notification.map(|n| n.message),
        }
    }
}

/// State/territory input fragment, swapped in when the country changes.
#[derive(Template)]
#[template(path = "shipping/state_field.html")]
pub struct StateFieldTemplate {
    pub field: FieldView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Show an empty shipping form.
///
/// GET /
#[instrument]
pub async fn show() -> ShippingPageTemplate {
    ShippingPageTemplate::new(&ShippingForm::new(), None)
}

/// Submit the shipping form.
///
/// POST /shipping
///
/// Returns 200 with a success toast and an empty form, or 422 with the entered
/// values and an error next to each failing field.
#[instrument(skip(input), fields(country = %input.country))]
pub async fn submit(Form(input): Form<ShippingFormInput>) -> Response {
    let mut form = ShippingForm::with_values(input);

    match form.submit() {
        Ok(submission) => {
            record_submission(&submission.data);
            ShippingPageTemplate::new(&form, Some(submission.notification)).into_response()
        }
        Err(errors) => {
            log_rejection(&errors);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                ShippingPageTemplate::new(&form, None),
            )
                .into_response()
        }
    }
}

/// Query for the state field fragment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StateFieldQuery {
    pub country: String,
    /// Last value typed into the state input, kept across country switches.
    pub state: String,
}

/// Render the state/territory input for a country.
///
/// GET /shipping/state-field?country=Australia&state=NSW
///
/// Returns an empty body when the country does not show the field.
#[instrument]
pub async fn state_field(Query(query): Query<StateFieldQuery>) -> Result<Html<String>> {
    let mut form = ShippingForm::new();
    form.update_field(ShippingField::Country, query.country);
    form.update_field(ShippingField::State, query.state);

    if !form.is_visible(ShippingField::State) {
        return Ok(Html(String::new()));
    }

    let html = StateFieldTemplate {
        field: FieldView::new(&form, ShippingField::State),
    }
    .render()?;

    Ok(Html(html))
}

/// Response for JSON form submission.
#[derive(Debug, Serialize)]
pub struct ShippingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Submit the shipping form as JSON.
///
/// POST /api/shipping
///
/// Accepts the same camelCase keys as the HTML form. Malformed JSON is a 400;
/// validation failures are a 422 with an `errors` object keyed by field name.
#[instrument(skip(payload))]
pub async fn submit_json(
    payload: std::result::Result<Json<ShippingFormInput>, JsonRejection>,
) -> Result<Response> {
    let Json(input) = payload?;
    let mut form = ShippingForm::with_values(input);

    let response = match form.submit() {
        Ok(submission) => {
            record_submission(&submission.data);
            (
                StatusCode::OK,
                Json(ShippingResponse {
                    success: true,
                    message: Some(submission.notification.message),
                    errors: None,
                }),
            )
        }
        Err(errors) => {
            log_rejection(&errors);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ShippingResponse {
                    success: false,
                    message: None,
                    errors: Some(errors),
                }),
            )
        }
    };

    Ok(response.into_response())
}

// =============================================================================
// Helpers
// =============================================================================

/// Log a valid submission. The record is not stored anywhere.
fn record_submission(data: &ShippingFormData) {
    tracing::info!(
        country = %data.country,
        city = %data.city,
        has_state = data.state.is_some(),
        "Shipping form submitted"
    );
    tracing::debug!(record = ?data, "Submitted shipping record");

    add_breadcrumb(
        "shipping",
        "Shipping form submitted",
        &[("country", data.country.as_str())],
    );
}

fn log_rejection(errors: &FieldErrors) {
    let fields: Vec<&str> = errors.iter().map(|(field, _)| field.name()).collect();
    tracing::info!(
        invalid_fields = %fields.join(","),
        "Shipping form rejected"
    );
}
