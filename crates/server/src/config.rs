//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required in production
//! - `STRIPE_SECRET_KEY` - Stripe API secret key (falls back to the
//!   `sk_test_YOUR_KEY_HERE` placeholder with a warning so the scrape path
//!   works without payment credentials)
//!
//! ## Optional
//! - `STRIPE_WEBHOOK_SECRET` - Webhook signing secret; webhook requests are
//!   rejected while unset
//! - `TROVE_HOST` - Bind address (default: 127.0.0.1)
//! - `TROVE_PORT` - Listen port (default: 3001)
//! - `TROVE_BASE_URL` - Fallback redirect origin when the checkout request
//!   carries no Origin header (default: <http://localhost:3000>)
//! - `TROVE_ALLOWED_SHIP_COUNTRIES` - Comma-separated ISO country codes for
//!   shipping collection (default: US,CA,GB,AU)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Placeholder secret key baked into local development setups.
pub const STRIPE_KEY_PLACEHOLDER: &str = "sk_test_YOUR_KEY_HERE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Fallback redirect origin for checkout success/cancel URLs
    pub base_url: String,
    /// Stripe API configuration
    pub stripe: StripeConfig,
    /// ISO 3166-1 alpha-2 codes accepted for shipping collection
    pub allowed_ship_countries: Vec<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Stripe API configuration.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct StripeConfig {
    /// API secret key (sk_live_... / sk_test_...)
    pub secret_key: SecretString,
    /// Webhook signing secret (whsec_...); `None` disables the webhook
    pub webhook_secret: Option<SecretString>,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("stripe", &self.stripe)
            .field("allowed_ship_countries", &self.allowed_ship_countries)
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TROVE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TROVE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TROVE_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TROVE_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("TROVE_BASE_URL", "http://localhost:3000");

        let stripe = StripeConfig::from_env();
        let allowed_ship_countries = get_env_or_default("TROVE_ALLOWED_SHIP_COUNTRIES", "US,CA,GB,AU")
            .split(',')
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            stripe,
            allowed_ship_countries,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StripeConfig {
    fn from_env() -> Self {
        let secret_key = match get_optional_env("STRIPE_SECRET_KEY") {
            Some(key) => SecretString::from(key),
            None => {
                tracing::warn!(
                    "STRIPE_SECRET_KEY not set, using placeholder - checkout will fail"
                );
                SecretString::from(STRIPE_KEY_PLACEHOLDER)
            }
        };

        Self {
            secret_key,
            webhook_secret: get_optional_env("STRIPE_WEBHOOK_SECRET").map(SecretString::from),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            base_url: "http://localhost:3000".to_string(),
            stripe: StripeConfig {
                secret_key: SecretString::from("sk_test_abc"),
                webhook_secret: None,
            },
            allowed_ship_countries: vec!["US".to_string()],
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_stripe_config_debug_redacts_secrets() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_live_super_secret"),
            webhook_secret: Some(SecretString::from("whsec_super_secret")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk_live_super_secret"));
        assert!(!debug_output.contains("whsec_super_secret"));
        // Sanity: the secrets are still readable through the accessor
        assert_eq!(config.secret_key.expose_secret(), "sk_live_super_secret");
    }
}
