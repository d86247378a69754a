//! Webhook signature verification.
//!
//! Stripe signs webhook deliveries with a `Stripe-Signature` header of the
//! form `t=<unix-ts>,v1=<hex hmac>[,v1=...,v0=...]`. The signed payload is
//! `"{t}.{raw body}"`, keyed with the endpoint's signing secret. Both the
//! signature and the timestamp must check out before the body is parsed;
//! the timestamp window blunts replay of captured deliveries.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use super::types::Event;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed delivery (the official SDK default).
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(300);

/// Errors that can occur while verifying a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No `stripe-signature` header on the request.
    #[error("missing stripe-signature header")]
    MissingHeader,

    /// Header present but not in `t=...,v1=...` form.
    #[error("malformed stripe-signature header")]
    MalformedHeader,

    /// No signing secret configured; the endpoint cannot accept deliveries.
    #[error("webhook signing secret is not configured")]
    MissingSecret,

    /// Signed timestamp outside the tolerance window.
    #[error("signed timestamp outside tolerance ({age_secs}s old)")]
    StaleTimestamp { age_secs: u64 },

    /// No candidate signature matched the payload.
    #[error("no signatures found matching the expected signature for payload")]
    SignatureMismatch,

    /// Signature checked out but the event body is not valid JSON.
    #[error("event payload parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Verify a delivery against the signing secret and parse the event.
///
/// # Errors
///
/// Returns `WebhookError` if the header is missing or malformed, the
/// timestamp is outside [`DEFAULT_TOLERANCE`], no `v1` signature matches,
/// or the verified body fails to parse.
pub fn verify_and_parse(
    payload: &str,
    signature_header: &str,
    secret: &str,
) -> Result<Event, WebhookError> {
    verify_at(payload, signature_header, secret, unix_now(), DEFAULT_TOLERANCE)
}

/// Verification with an explicit clock, for deterministic tests.
pub fn verify_at(
    payload: &str,
    signature_header: &str,
    secret: &str,
    now: u64,
    tolerance: Duration,
) -> Result<Event, WebhookError> {
    let header = parse_header(signature_header)?;

    let age_secs = now.abs_diff(header.timestamp);
    if age_secs > tolerance.as_secs() {
        return Err(WebhookError::StaleTimestamp { age_secs });
    }

    let signed_payload = format!("{}.{payload}", header.timestamp);
    let matched = header.signatures.iter().any(|candidate| {
        hex::decode(candidate).is_ok_and(|sig| {
            // Key length is unrestricted for HMAC, so construction cannot
            // fail; verify_slice compares in constant time.
            HmacSha256::new_from_slice(secret.as_bytes())
                .is_ok_and(|mut mac| {
                    mac.update(signed_payload.as_bytes());
                    mac.verify_slice(&sig).is_ok()
                })
        })
    });

    if !matched {
        return Err(WebhookError::SignatureMismatch);
    }

    Ok(serde_json::from_str(payload)?)
}

struct SignatureHeader {
    timestamp: u64,
    /// All `v1` entries; rotation can put two valid signatures on one
    /// delivery.
    signatures: Vec<String>,
}

fn parse_header(header: &str) -> Result<SignatureHeader, WebhookError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for pair in header.split(',') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            return Err(WebhookError::MalformedHeader);
        };
        match key {
            "t" => {
                timestamp =
                    Some(value.parse::<u64>().map_err(|_| WebhookError::MalformedHeader)?);
            }
            "v1" => signatures.push(value.to_string()),
            // Unknown schemes (v0 etc.) are ignored
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(WebhookError::MalformedHeader)?;
    if signatures.is_empty() {
        return Err(WebhookError::MalformedHeader);
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Sign a payload the way the provider would. Test helper.
#[must_use]
pub fn sign(payload: &str, secret: &str, timestamp: u64) -> String {
    let signed_payload = format!("{timestamp}.{payload}");
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(signed_payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    format!("t={timestamp},v1={signature}")
}
