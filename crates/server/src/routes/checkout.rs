//! Checkout route handler.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::ORIGIN},
};
use serde::Deserialize;
use tracing::instrument;
use trove_core::{CartItem, CheckoutSession};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::stripe::{SessionRequest, checkout};

/// Checkout request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Items to charge for; must be non-empty.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Email hint forwarded to the hosted payment page.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Accepted for API compatibility; the provider collects the actual
    /// shipping address on the hosted page.
    #[serde(default)]
    pub shipping_address: Option<serde_json::Value>,
}

/// Create a hosted payment session for a cart.
///
/// POST /api/checkout
///
/// Prices the cart (one rounded minor-unit conversion per amount), appends
/// the curation-fee line, and asks the provider for a hosted session. The
/// computed total is logged but not reconciled against the provider's sum.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an empty cart and `AppError::Stripe`
/// when the provider call fails.
#[instrument(skip(state, headers, request), fields(items = request.items.len()))]
pub async fn checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutSession>> {
    if request.items.is_empty() {
        return Err(AppError::BadRequest("No items provided".to_string()));
    }

    let plan = checkout::plan(&request.items);
    tracing::info!(
        subtotal = plan.subtotal,
        fee = plan.fee,
        total = plan.total,
        "Priced checkout"
    );

    let origin = redirect_origin(&headers, &state.config().base_url);
    let session_request = SessionRequest {
        success_url: format!("{origin}?success=true"),
        cancel_url: format!("{origin}?canceled=true"),
        customer_email: request.customer_email,
        allowed_ship_countries: state.config().allowed_ship_countries.clone(),
    };

    let session = state
        .stripe()
        .create_checkout_session(&plan, &session_request)
        .await?;

    tracing::info!(session_id = %session.session_id, "Checkout session created");
    Ok(Json(session))
}

/// The caller's declared origin, with the configured fallback.
fn redirect_origin(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_redirect_origin_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_static("https://shop.front"));
        assert_eq!(
            redirect_origin(&headers, "http://localhost:3000"),
            "https://shop.front"
        );
    }

    #[test]
    fn test_redirect_origin_falls_back() {
        let headers = HeaderMap::new();
        assert_eq!(
            redirect_origin(&headers, "http://localhost:3000"),
            "http://localhost:3000"
        );
    }
}
