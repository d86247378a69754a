//! Per-field locator chains, validators, and defaults.
//!
//! Chain order is significant and fixed: structured metadata first, then
//! site-specific hooks (Amazon price blocks, test ids), then generic
//! heuristics like the page's first heading. Each field's chain is fully
//! independent of the others.

use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::Html;
use url::Url;

use super::locator::{Locator, first_valid};

/// Sentinel returned when no name locator yields a usable value.
pub const DEFAULT_NAME: &str = "Unknown Product";

/// Maximum accepted name length and description truncation point.
const MAX_TEXT_LEN: usize = 500;

/// Description candidates shorter than this are considered boilerplate.
const MIN_DESCRIPTION_LEN: usize = 10;

/// Prices at or above this are treated as extraction noise.
const MAX_PRICE: i64 = 100_000;

/// Image candidates containing any of these substrings are site chrome,
/// not product photography. Case-sensitive, checked post-normalization.
const IMAGE_BLOCKLIST: &[&str] = &["icon", "logo", "1x1"];

const NAME_LOCATORS: &[Locator] = &[
    Locator::Meta(r#"meta[property="og:title"]"#),
    Locator::Meta(r#"meta[name="twitter:title"]"#),
    Locator::Text("#productTitle"),
    Locator::Text("#title"),
    Locator::Text(r#"[data-testid="product-title"]"#),
    Locator::Text(".product-title"),
    Locator::Text(".product-name"),
    Locator::Text(".product_title"),
    Locator::Text("h1.title"),
    Locator::Text(r#"h1[itemprop="name"]"#),
    Locator::Text(r#"[itemprop="name"]"#),
    Locator::Text("h1"),
    Locator::Text("title"),
];

const PRICE_LOCATORS: &[Locator] = &[
    Locator::TextOrContent(r#"[itemprop="price"]"#),
    Locator::Meta(r#"meta[itemprop="price"]"#),
    Locator::TextOrContent(".a-price .a-offscreen"),
    Locator::TextOrContent("#priceblock_ourprice"),
    Locator::TextOrContent("#priceblock_dealprice"),
    Locator::TextOrContent(".a-price-whole"),
    Locator::TextOrContent(r#"[data-testid="product-price"]"#),
    Locator::TextOrContent(".product-price"),
    Locator::TextOrContent(".price"),
    Locator::TextOrContent(".current-price"),
    Locator::TextOrContent(".sale-price"),
    Locator::TextOrContent(".regular-price"),
    Locator::TextOrContent(".product_price"),
    Locator::Meta(r#"meta[property="product:price:amount"]"#),
    Locator::Meta(r#"meta[property="og:price:amount"]"#),
];

const IMAGE_LOCATORS: &[Locator] = &[
    Locator::Meta(r#"meta[property="og:image"]"#),
    Locator::Meta(r#"meta[property="og:image:secure_url"]"#),
    Locator::Meta(r#"meta[name="twitter:image"]"#),
    Locator::ImgSrc("#landingImage"),
    Locator::ImgSrc("#imgBlkFront"),
    Locator::ImgSrc("#main-image"),
    Locator::ImgSrc(r#"[data-testid="product-image"] img"#),
    Locator::ImgSrc(".product-image img"),
    Locator::ImgSrc(".product-gallery img"),
    Locator::ImgSrc(".gallery-image"),
    Locator::ImgSrc(r#"[itemprop="image"]"#),
    Locator::ImgSrc(".main-image img"),
    Locator::ImgSrc("#product-image"),
    Locator::ImgSrc(r#"img[src*="product"]"#),
    Locator::ImgSrc(r#"img[src*="upload"]"#),
];

const DESCRIPTION_LOCATORS: &[Locator] = &[
    Locator::Meta(r#"meta[property="og:description"]"#),
    Locator::Meta(r#"meta[name="description"]"#),
    Locator::Text(r#"[itemprop="description"]"#),
    Locator::Text(".product-description"),
    Locator::Text("#product-description"),
];

/// Extract the product name. Defaults to [`DEFAULT_NAME`].
pub fn name(doc: &Html) -> String {
    first_valid(doc, NAME_LOCATORS, |raw| {
        let text = collapse_whitespace(&raw);
        let len = text.chars().count();
        (len > 0 && len < MAX_TEXT_LEN).then_some(text)
    })
    .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Extract the price in standard units. Defaults to zero.
pub fn price(doc: &Html) -> Decimal {
    first_valid(doc, PRICE_LOCATORS, |raw| {
        let numeric = numeric_substring(&raw)?;
        let price = Decimal::from_str(&numeric).ok()?;
        (price > Decimal::ZERO && price < Decimal::from(MAX_PRICE)).then_some(price)
    })
    .unwrap_or(Decimal::ZERO)
}

/// Extract the main product image as an absolute URL. Defaults to empty.
pub fn image(doc: &Html, source_url: &str) -> String {
    first_valid(doc, IMAGE_LOCATORS, |raw| {
        let src = normalize_image_url(&raw, source_url)?;
        IMAGE_BLOCKLIST
            .iter()
            .all(|blocked| !src.contains(blocked))
            .then_some(src)
    })
    .unwrap_or_default()
}

/// Extract the description, truncated to 500 characters. Defaults to empty.
pub fn description(doc: &Html) -> String {
    first_valid(doc, DESCRIPTION_LOCATORS, |raw| {
        let text = collapse_whitespace(&raw);
        (text.chars().count() > MIN_DESCRIPTION_LEN)
            .then(|| text.chars().take(MAX_TEXT_LEN).collect())
    })
    .unwrap_or_default()
}

/// Trim and collapse internal whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pull the first price-like substring out of a candidate: a run of digits
/// and thousands separators, with at most one decimal point. Commas are
/// stripped before parsing.
fn numeric_substring(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit() || c == ',')?;
    let mut digits = String::new();
    let mut chars = text.get(start..)?.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == ',' {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut fraction = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                fraction.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if !fraction.is_empty() {
            digits.push('.');
            digits.push_str(&fraction);
        }
    }

    let cleaned: String = digits.chars().filter(|&c| c != ',').collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Resolve protocol-relative and root-relative image URLs.
///
/// `//cdn...` gets an `https:` prefix; `/path` is resolved against the
/// origin of the page the listing came from. Anything else passes through
/// untouched. Returns `None` when the source URL cannot supply an origin.
fn normalize_image_url(src: &str, source_url: &str) -> Option<String> {
    if let Some(rest) = src.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if src.starts_with('/') {
        let origin = Url::parse(source_url).ok()?.origin().ascii_serialization();
        return Some(format!("{origin}{src}"));
    }
    Some(src.to_string())
}
