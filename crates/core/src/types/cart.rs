//! Cart items supplied by the caller and the provider session they map to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single priced item in a checkout request.
///
/// Caller-supplied and trusted beyond presence checks; the payment provider
/// is the final arbiter of what gets charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Display name for the provider's line item.
    pub name: String,
    /// Per-unit price in standard units (dollars).
    pub base_price: Decimal,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Optional product image forwarded to the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional origin page, round-tripped through provider metadata for
    /// later reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// A hosted checkout session created by the payment provider.
///
/// Both fields are provider-opaque. No local copy is retained; the
/// provider's metadata field is the only persistence of order contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL of the provider-hosted payment page.
    pub url: String,
    /// Provider session identifier.
    pub session_id: String,
}
