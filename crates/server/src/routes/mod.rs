//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! POST /api/scrape    - Extract a product listing from a URL
//! POST /api/checkout  - Create a hosted payment session
//! POST /api/webhook   - Signed payment-provider callbacks
//! GET  /api/health    - Health check
//! ```
//!
//! No two requests share mutable state; every handler works off the
//! injected [`crate::state::AppState`] clients and returns JSON.

pub mod checkout;
pub mod scrape;
pub mod webhook;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/scrape", post(scrape::scrape))
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/webhook", post(webhook::webhook))
        .route("/api/health", get(health))
}

/// Liveness health check endpoint.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
