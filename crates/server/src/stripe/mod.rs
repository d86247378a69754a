//! Stripe Checkout client and webhook verification.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` (form-encoded bracket notation), no SDK
//! - The client is constructed once and injected through `AppState`
//! - Webhook deliveries are HMAC-verified before any payload parsing
//!
//! # Example
//!
//! ```rust,ignore
//! use trove_server::stripe::{StripeClient, checkout, client::SessionRequest};
//!
//! let client = StripeClient::new(config.stripe.secret_key.clone());
//! let plan = checkout::plan(&items);
//! let session = client.create_checkout_session(&plan, &request).await?;
//! ```

pub mod checkout;
pub mod client;
pub mod types;
pub mod webhook;

pub use client::{SessionRequest, StripeClient};
pub use types::{CompletedSession, Event};
pub use webhook::WebhookError;

use thiserror::Error;

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}
