//! Heuristic product-field extraction.
//!
//! For each field (name, price, image, description) an ordered list of
//! [`locator::Locator`]s is tried in sequence; the first candidate that
//! passes the field's validator wins, and an exhausted chain yields the
//! field's documented default. Extraction therefore never fails: a page with
//! nothing recognizable still produces a well-formed [`ProductListing`],
//! and callers must treat the defaults as "field not found".

pub mod fields;
pub mod locator;

pub use fields::DEFAULT_NAME;

use scraper::Html;
use trove_core::ProductListing;

/// Run all four field chains against a parsed document.
#[must_use]
pub fn extract(document: &Html, source_url: &str) -> ProductListing {
    ProductListing {
        name: fields::name(document),
        price: fields::price(document),
        image: fields::image(document, source_url),
        description: fields::description(document),
        source_url: source_url.to_string(),
    }
}

/// Parse raw HTML and extract a listing in one step.
///
/// The parsed document is confined to this function so handlers never hold
/// it across an await point (`Html` is not `Send`).
#[must_use]
pub fn scrape(html: &str, source_url: &str) -> ProductListing {
    let document = Html::parse_document(html);
    extract(&document, source_url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_full_document() {
        let html = r#"<html><head>
            <meta property="og:title" content="Walnut Desk Organizer">
            <meta property="og:image" content="//cdn.shop.example.com/desk.jpg">
            <meta property="og:description" content="A handsome walnut organizer for a tidy desk.">
          </head><body>
            <span class="price">$89.00</span>
          </body></html>"#;

        let listing = scrape(html, "https://shop.example.com/p/42");

        assert_eq!(listing.name, "Walnut Desk Organizer");
        assert_eq!(listing.price, Decimal::from_str("89.00").unwrap());
        assert_eq!(listing.image, "https://cdn.shop.example.com/desk.jpg");
        assert_eq!(
            listing.description,
            "A handsome walnut organizer for a tidy desk."
        );
        assert_eq!(listing.source_url, "https://shop.example.com/p/42");
    }

    #[test]
    fn test_extract_empty_document_yields_defaults() {
        let listing = scrape("<html><body></body></html>", "https://x.com/p");

        assert_eq!(listing.name, DEFAULT_NAME);
        assert_eq!(listing.price, Decimal::ZERO);
        assert_eq!(listing.image, "");
        assert_eq!(listing.description, "");
    }

    #[test]
    fn test_field_chains_are_independent() {
        // A page with only a price still resolves the other fields to
        // their defaults, and vice versa.
        let listing = scrape(
            r#"<html><body><span class="price">15.00</span></body></html>"#,
            "https://x.com/p",
        );
        assert_eq!(listing.price, Decimal::from_str("15.00").unwrap());
        assert_eq!(listing.name, DEFAULT_NAME);
        assert_eq!(listing.image, "");
    }
}
