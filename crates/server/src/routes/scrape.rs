//! Scrape route handler.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;
use trove_core::ProductListing;

use crate::error::{AppError, Result};
use crate::extract;
use crate::state::AppState;

/// Scrape request body.
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    /// Product page to extract from.
    #[serde(default)]
    pub url: Option<String>,
}

/// Extract a product listing from a URL.
///
/// POST /api/scrape
///
/// Fetches the page, runs the four field-extraction chains, and returns the
/// listing. Extraction itself cannot fail; only a missing URL (400) or an
/// unreachable page (500) produce errors.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when no url is supplied and
/// `AppError::Fetch` when the target page cannot be retrieved.
#[instrument(skip(state, request))]
pub async fn scrape(
    State(state): State<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ProductListing>> {
    let url = request
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("URL is required".to_string()))?;

    tracing::info!(url = %url, "Scraping product page");

    let html = state.fetcher().fetch(&url).await?;
    let listing = extract::scrape(&html, &url);

    tracing::info!(
        name = %listing.name,
        price = %listing.price,
        has_image = !listing.image.is_empty(),
        "Extracted listing"
    );

    Ok(Json(listing))
}
