//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Shipping form page
//! GET  /health                 - Health check
//!
//! # Shipping form
//! POST /shipping               - Submit form (page with toast or inline errors)
//! GET  /shipping/state-field   - State input fragment for ?country=&state=
//!
//! # JSON API
//! POST /api/shipping           - Submit form as JSON
//! ```

pub mod shipping;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the shipping form routes router.
pub fn shipping_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shipping::submit))
        .route("/state-field", get(shipping::state_field))
}

/// Create all routes for the shipping form server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shipping::show))
        .route("/health", get(health))
        .nest("/shipping", shipping_routes())
        .route("/api/shipping", post(shipping::submit_json))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
