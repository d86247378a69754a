//! Integration tests for Trove.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p trove-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api` - Router-level request/response tests (no network)
//! - `extraction` - Full-document extraction scenarios
//! - `checkout_flow` - Cart pricing and provider wire shape

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use trove_server::config::{ServerConfig, StripeConfig};
use trove_server::state::AppState;

/// Build an `AppState` for router tests. No outbound call is made unless a
/// test drives the scrape or checkout path against a live target.
///
/// # Panics
///
/// Panics if the fetcher HTTP client cannot be built.
#[must_use]
pub fn test_state(webhook_secret: Option<&str>) -> AppState {
    let config = ServerConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        stripe: StripeConfig {
            secret_key: SecretString::from("sk_test_router_tests"),
            webhook_secret: webhook_secret.map(SecretString::from),
        },
        allowed_ship_countries: vec!["US".to_string(), "CA".to_string()],
        sentry_dsn: None,
    };

    AppState::new(config).expect("state builds without network access")
}
