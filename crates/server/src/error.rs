//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every failure converts to a JSON error body at the
//! request boundary. Nothing is retried and nothing is fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::fetch::FetchError;
use crate::stripe::{StripeError, WebhookError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from the client (missing url, empty cart).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Target page could not be fetched or parsed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Stripe API operation failed.
    #[error("Stripe error: {0}")]
    Stripe(#[from] StripeError),

    /// Webhook signature verification failed.
    #[error("Webhook error: {0}")]
    Signature(#[from] WebhookError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side errors to Sentry
        if matches!(self, Self::Fetch(_) | Self::Stripe(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            // The upstream message is surfaced so callers can distinguish
            // timeouts from blocks. Known information-leak; kept for parity
            // with the original API contract.
            Self::Fetch(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to scrape product",
                    "message": err.to_string(),
                })),
            )
                .into_response(),
            Self::Stripe(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create checkout session" })),
            )
                .into_response(),
            Self::Signature(err) => {
                // Raw verification details are logged only, never surfaced
                tracing::warn!(error = %err, "Webhook signature verification failed");
                (
                    StatusCode::BAD_REQUEST,
                    "Webhook Error: signature verification failed",
                )
                    .into_response()
            }
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
