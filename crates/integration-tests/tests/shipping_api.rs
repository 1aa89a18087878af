//! Integration tests for the JSON shipping endpoint.

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;
use shipping_form_core::SUCCESS_MESSAGE;

use shipping_form_integration_tests::{body_json, json_post, send};

fn valid_dutch() -> serde_json::Value {
    json!({
        "country": "Netherlands",
        "firstName": "Jane",
        "lastName": "Doe",
        "address": "1 Main St",
        "postalCode": "1000AB",
        "city": "Amsterdam",
        "phone": "0612345678"
    })
}

#[tokio::test]
async fn test_valid_record_succeeds() {
    let response = send(json_post("/api/shipping", &valid_dutch())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], SUCCESS_MESSAGE);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_missing_country_defaults_to_netherlands() {
    let mut record = valid_dutch();
    record.as_object_mut().unwrap().remove("country");

    let response = send(json_post("/api/shipping", &record)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_whitespace_first_name_is_accepted() {
    let mut record = valid_dutch();
    record["firstName"] = json!("   ");

    let response = send(json_post("/api/shipping", &record)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_australia_without_state_has_single_error() {
    let mut record = valid_dutch();
    record["country"] = json!("Australia");
    record["state"] = json!("");

    let response = send(json_post("/api/shipping", &record)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["errors"],
        json!({"state": "State/territory is required"})
    );
}

#[tokio::test]
async fn test_australia_with_state_succeeds() {
    let mut record = valid_dutch();
    record["country"] = json!("Australia");
    record["state"] = json!("Victoria");

    let response = send(json_post("/api/shipping", &record)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_each_required_field_reported_alone() {
    for field in [
        "firstName",
        "lastName",
        "address",
        "postalCode",
        "city",
        "phone",
    ] {
        let mut record = valid_dutch();
        record[field] = json!("");

        let response = send(json_post("/api/shipping", &record)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let errors = body_json(response).await["errors"].clone();
        let errors = errors.as_object().unwrap();
        assert_eq!(errors.len(), 1, "only {field} should fail");
        assert!(errors.contains_key(field));
    }
}

#[tokio::test]
async fn test_unsupported_country() {
    let mut record = valid_dutch();
    record["country"] = json!("France");

    let response = send(json_post("/api/shipping", &record)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(
        body["errors"]["country"],
        "Country must be one of: Netherlands, Australia"
    );
}

#[tokio::test]
async fn test_same_invalid_input_gives_same_errors() {
    let record = json!({"country": "Australia", "firstName": "Jane"});

    let first = body_json(send(json_post("/api/shipping", &record)).await).await;
    let second = body_json(send(json_post("/api/shipping", &record)).await).await;
    assert_eq!(first, second);
    assert_eq!(first["errors"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/shipping")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
