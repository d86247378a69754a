//! Wire types for the Stripe Checkout and webhook APIs.
//!
//! Only the fields this service reads are modeled; everything else in the
//! provider's payloads is ignored during deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// A signed event envelope delivered to the webhook endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Provider event id (`evt_...`). Logged for traceability; deliveries
    /// are not deduplicated on it.
    pub id: String,
    /// Event type, e.g. `checkout.session.completed`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload.
    pub data: EventData,
}

/// The `data` member of an event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    /// The API object the event describes, kept raw until the event type
    /// is known.
    pub object: serde_json::Value,
}

impl Event {
    /// Event type emitted when a hosted checkout completes.
    pub const CHECKOUT_COMPLETED: &'static str = "checkout.session.completed";

    /// View this event as a completed checkout session, if it is one.
    #[must_use]
    pub fn completed_session(&self) -> Option<CompletedSession> {
        if self.event_type != Self::CHECKOUT_COMPLETED {
            return None;
        }
        serde_json::from_value(self.data.object.clone()).ok()
    }
}

/// The slice of a completed checkout session the order log needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletedSession {
    /// Session id (`cs_...`).
    pub id: String,
    /// Email the customer entered on the hosted page.
    pub customer_email: Option<String>,
    /// Final charged amount in minor units, as summed by the provider.
    pub amount_total: Option<i64>,
    /// Metadata round-tripped from session creation; `order_items` carries
    /// the reconciliation summary.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Shipping name and address collected by the provider.
    pub shipping_details: Option<serde_json::Value>,
}

/// Response from `POST /v1/checkout/sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionResponse {
    /// Session id (`cs_...`).
    pub id: String,
    /// URL of the hosted payment page.
    pub url: String,
}
