//! Normalized product listing produced by the scrape path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product listing extracted from a third-party page.
///
/// Built once per scrape request and returned to the caller; nothing is
/// persisted. Fields that could not be extracted carry their documented
/// defaults rather than errors: [`ProductListing::name`] falls back to
/// `"Unknown Product"`, `price` to `0`, and `image`/`description` to the
/// empty string. Callers must treat defaults as "field not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    /// Product name, or `"Unknown Product"` when no locator matched.
    pub name: String,
    /// Price in the currency's standard unit (dollars, not cents). Zero
    /// means "not found".
    pub price: Decimal,
    /// Absolute image URL, or empty when no acceptable candidate was found.
    pub image: String,
    /// Plain-text description, at most 500 characters.
    pub description: String,
    /// The URL the listing was scraped from.
    pub source_url: String,
}
