//! Integration tests for the HTML shipping form.
//!
//! These tests render the page, submit the urlencoded form and request the
//! state field fragment through the full middleware stack.

use axum::http::StatusCode;
use shipping_form_core::SUCCESS_MESSAGE;

use shipping_form_integration_tests::{body_text, form_post, get, send, valid_dutch_pairs};

// =============================================================================
// Page Tests
// =============================================================================

#[tokio::test]
async fn test_form_page_renders_defaults() {
    let response = send(get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Shipping Information - Netherlands"));
    assert!(html.contains(r#"<option value="Netherlands" selected>"#));
    assert!(html.contains(r#"<option value="Australia">"#));
    assert!(html.contains(r#"name="firstName""#));
    assert!(html.contains(r#"placeholder="Company (optional)""#));
    assert!(
        !html.contains(r#"name="state""#),
        "state field is hidden for the Netherlands"
    );
    assert!(!html.contains(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let response = send(get("/")).await;
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("cache-control").unwrap(), "no-store, max-age=0");
    assert!(headers.get("content-security-policy").is_some());
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_health() {
    let response = send(get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = send(get("/checkout")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not found: /checkout");
}

// =============================================================================
// Submit Tests
// =============================================================================

#[tokio::test]
async fn test_valid_submit_shows_toast_and_resets() {
    let response = send(form_post("/shipping", &valid_dutch_pairs())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(SUCCESS_MESSAGE));
    assert!(!html.contains("is required"));
    // The record is discarded, so the form comes back empty
    assert!(!html.contains(r#"value="Jane""#));
}

#[tokio::test]
async fn test_invalid_submit_keeps_values_and_shows_errors() {
    let pairs = [
        ("country", "Netherlands"),
        ("firstName", "Jane"),
        ("lastName", ""),
        ("address", "1 Main St"),
        ("postalCode", "1000AB"),
        ("city", "Amsterdam"),
        ("phone", ""),
    ];
    let response = send(form_post("/shipping", &pairs)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Last name is required"));
    assert!(html.contains("Phone is required"));
    assert!(!html.contains("First name is required"));
    assert!(html.contains(r#"value="Jane""#));
    assert!(!html.contains(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_australia_without_state_reveals_state_error() {
    let mut pairs = valid_dutch_pairs().to_vec();
    pairs.retain(|(k, _)| *k != "country");
    pairs.push(("country", "Australia"));

    let response = send(form_post("/shipping", &pairs)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Shipping Information - Australia"));
    assert!(html.contains(r#"name="state""#));
    assert!(html.contains("State/territory is required"));
    assert_eq!(html.matches("is required").count(), 1);
}

#[tokio::test]
async fn test_hidden_state_value_is_ignored() {
    let mut pairs = valid_dutch_pairs().to_vec();
    pairs.push(("state", ""));

    let response = send(form_post("/shipping", &pairs)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_empty_submit_reports_every_required_field() {
    let response = send(form_post("/shipping", &[("country", "")])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    for message in [
        "Country is required",
        "First name is required",
        "Last name is required",
        "Address is required",
        "Postal code is required",
        "City is required",
        "Phone is required",
    ] {
        assert!(html.contains(message), "missing {message}");
    }
    assert!(!html.contains("State/territory is required"));
}

// =============================================================================
// State Field Fragment Tests
// =============================================================================

#[tokio::test]
async fn test_state_fragment_for_australia_keeps_typed_value() {
    let response = send(get("/shipping/state-field?country=Australia&state=NSW")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"name="state""#));
    assert!(html.contains(r#"placeholder="State/Territory""#));
    assert!(html.contains(r#"value="NSW""#));
    assert!(!html.contains("is required"));
}

#[tokio::test]
async fn test_state_fragment_empty_for_netherlands() {
    let response = send(get("/shipping/state-field?country=Netherlands&state=NSW")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_state_fragment_empty_without_country() {
    let response = send(get("/shipping/state-field")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.is_empty());
}
