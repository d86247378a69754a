//! Stripe REST client for hosted checkout sessions.
//!
//! Talks to `POST /v1/checkout/sessions` with form-encoded bracket-notation
//! parameters. The client is constructed once at startup and injected via
//! [`crate::state::AppState`]; no ambient module state.

use secrecy::{ExposeSecret, SecretString};
use trove_core::CheckoutSession;

use super::StripeError;
use super::checkout::CheckoutPlan;
use super::types::CreateSessionResponse;

/// Stripe API base URL.
const BASE_URL: &str = "https://api.stripe.com/v1";

/// Everything a hosted session is created from, besides the priced plan.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Redirect target after successful payment.
    pub success_url: String,
    /// Redirect target after the customer backs out.
    pub cancel_url: String,
    /// Pre-filled email on the hosted page.
    pub customer_email: Option<String>,
    /// ISO country codes the provider may collect shipping addresses for.
    pub allowed_ship_countries: Vec<String>,
}

/// Client for the Stripe Checkout API.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    secret_key: SecretString,
}

impl StripeClient {
    /// Create a new Stripe API client.
    #[must_use]
    pub fn new(secret_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
        }
    }

    /// Create a hosted checkout session from a priced plan.
    ///
    /// # Errors
    ///
    /// Returns `StripeError` if the request fails, the provider rejects it,
    /// or the response cannot be parsed.
    #[tracing::instrument(skip(self, plan, request), fields(lines = plan.line_items.len(), total = plan.total))]
    pub async fn create_checkout_session(
        &self,
        plan: &CheckoutPlan,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, StripeError> {
        let params = session_form_params(plan, request);

        let response = self
            .client
            .post(format!("{BASE_URL}/checkout/sessions"))
            .bearer_auth(self.secret_key.expose_secret())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %message.chars().take(500).collect::<String>(),
                "Stripe API returned non-success status"
            );
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))?;

        Ok(CheckoutSession {
            url: session.url,
            session_id: session.id,
        })
    }
}

/// Flatten a plan into Stripe's bracket-notation form parameters.
///
/// Kept separate from the HTTP call so the exact wire shape is testable.
#[must_use]
pub fn session_form_params(
    plan: &CheckoutPlan,
    request: &SessionRequest,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("payment_method_types[0]".into(), "card".into()),
        ("mode".into(), "payment".into()),
        ("success_url".into(), request.success_url.clone()),
        ("cancel_url".into(), request.cancel_url.clone()),
        (
            "metadata[order_items]".into(),
            plan.order_items_metadata.clone(),
        ),
    ];

    if let Some(email) = &request.customer_email {
        params.push(("customer_email".into(), email.clone()));
    }

    for (i, country) in request.allowed_ship_countries.iter().enumerate() {
        params.push((
            format!("shipping_address_collection[allowed_countries][{i}]"),
            country.clone(),
        ));
    }

    for (i, line) in plan.line_items.iter().enumerate() {
        let prefix = format!("line_items[{i}]");
        params.push((format!("{prefix}[price_data][currency]"), "usd".into()));
        params.push((
            format!("{prefix}[price_data][product_data][name]"),
            line.name.clone(),
        ));
        if let Some(description) = &line.description {
            params.push((
                format!("{prefix}[price_data][product_data][description]"),
                description.clone(),
            ));
        }
        if let Some(image) = &line.image {
            params.push((
                format!("{prefix}[price_data][product_data][images][0]"),
                image.clone(),
            ));
        }
        params.push((
            format!("{prefix}[price_data][unit_amount]"),
            line.unit_amount.to_string(),
        ));
        params.push((format!("{prefix}[quantity]"), line.quantity.to_string()));
    }

    params
}
