//! Integration tests for the shipping form.
//!
//! The tests build the full router with [`shipping_form_web::app`] and drive
//! it in-process through `tower::ServiceExt::oneshot`; no server is started.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shipping-form-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `shipping_form` - HTML form page, submit and state field fragment
//! - `shipping_api` - JSON submit endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use shipping_form_web::{config::ShippingConfig, state::AppState};
use tower::ServiceExt;

/// Build the application router with default configuration.
#[must_use]
pub fn test_app() -> Router {
    shipping_form_web::app(AppState::new(ShippingConfig::default()))
}

/// Send one request through a fresh router.
///
/// # Panics
///
/// Panics if the router itself fails, which axum routers never do.
pub async fn send(request: Request<Body>) -> Response<Body> {
    test_app()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Read a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("body should be JSON")
}

/// Build a urlencoded form POST.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn form_post(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("valid request")
}

/// Build a JSON POST.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn json_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Build a GET.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// The reference valid Dutch address as form pairs.
#[must_use]
pub const fn valid_dutch_pairs() -> [(&'static str, &'static str); 7] {
    [
        ("country", "Netherlands"),
        ("firstName", "Jane"),
        ("lastName", "Doe"),
        ("address", "1 Main St"),
        ("postalCode", "1000AB"),
        ("city", "Amsterdam"),
        ("phone", "0612345678"),
    ]
}
