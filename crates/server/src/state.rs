//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::fetch::{FetchError, PageFetcher};
use crate::stripe::StripeClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Both outbound clients are built once here
/// and injected into handlers; nothing request-scoped is mutable, so no
/// locking is needed anywhere.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    fetcher: PageFetcher,
    stripe: StripeClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the page-fetcher HTTP client fails to build.
    pub fn new(config: ServerConfig) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new()?;
        let stripe = StripeClient::new(config.stripe.secret_key.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                fetcher,
                stripe,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the page fetcher.
    #[must_use]
    pub fn fetcher(&self) -> &PageFetcher {
        &self.inner.fetcher
    }

    /// Get a reference to the Stripe client.
    #[must_use]
    pub fn stripe(&self) -> &StripeClient {
        &self.inner.stripe
    }
}
