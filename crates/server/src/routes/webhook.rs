//! Webhook route handler.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::instrument;
use trove_core::from_minor_units;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::stripe::{Event, WebhookError, webhook};

/// Header carrying the provider's delivery signature.
const SIGNATURE_HEADER: &str = "stripe-signature";

/// Handle signed payment-provider callbacks.
///
/// POST /api/webhook
///
/// The raw body is verified against the webhook signing secret before any
/// parsing. A verified `checkout.session.completed` event gets its order
/// logged; every other verified event type is acknowledged and ignored.
/// Logging happens once per delivery - the provider may redeliver, and no
/// event-id dedup exists.
///
/// # Errors
///
/// Returns `AppError::Signature` when the header is missing, the secret is
/// unconfigured, or verification fails. The response body stays generic;
/// details go to the log only.
#[instrument(skip(state, headers, body))]
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Signature(WebhookError::MissingHeader))?;

    let secret = state
        .config()
        .stripe
        .webhook_secret
        .as_ref()
        .ok_or(AppError::Signature(WebhookError::MissingSecret))?;

    let payload = std::str::from_utf8(&body)
        .map_err(|_| AppError::BadRequest("request body is not valid UTF-8".to_string()))?;

    let event = webhook::verify_and_parse(payload, signature, secret.expose_secret())
        .map_err(AppError::Signature)?;

    log_completed_order(&event);

    Ok(Json(json!({ "received": true })))
}

/// Log a completed order. Terminal by design: no database write, no
/// outbound notification.
fn log_completed_order(event: &Event) {
    let Some(session) = event.completed_session() else {
        tracing::debug!(event_id = %event.id, event_type = %event.event_type, "Ignoring event");
        return;
    };

    tracing::info!(
        event_id = %event.id,
        session_id = %session.id,
        customer = session.customer_email.as_deref().unwrap_or("(none)"),
        amount_usd = %session.amount_total.map(from_minor_units).unwrap_or_default(),
        items = session
            .metadata
            .get("order_items")
            .map_or("(none)", String::as_str),
        shipping = %session
            .shipping_details
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "(none)".to_string()),
        "New order completed"
    );
}
