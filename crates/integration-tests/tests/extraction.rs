//! Full-document extraction scenarios.
//!
//! Each test feeds a realistic page shape through the whole extraction
//! pipeline and checks where in the fallback chain each field resolved.

use rust_decimal::Decimal;
use std::str::FromStr;

use trove_server::extract::{DEFAULT_NAME, scrape};

const SOURCE: &str = "https://shop.example.com/p/1";

#[test]
fn test_well_tagged_storefront_page() {
    let html = r#"<html>
      <head>
        <title>Buy the Aurora Lamp | Example Shop</title>
        <meta property="og:title" content="Aurora Table Lamp">
        <meta property="og:image" content="https://cdn.example.com/aurora-product.jpg">
        <meta property="og:description" content="A dimmable table lamp with a hand-blown glass shade and brass stem.">
        <meta property="og:price:amount" content="129.00">
      </head>
      <body>
        <h1>Aurora Table Lamp</h1>
        <span class="price">$129.00</span>
      </body>
    </html>"#;

    let listing = scrape(html, SOURCE);

    assert_eq!(listing.name, "Aurora Table Lamp");
    // .price outranks the og:price:amount meta tag
    assert_eq!(listing.price, Decimal::from_str("129.00").unwrap());
    assert_eq!(listing.image, "https://cdn.example.com/aurora-product.jpg");
    assert!(listing.description.starts_with("A dimmable table lamp"));
    assert_eq!(listing.source_url, SOURCE);
}

#[test]
fn test_amazon_shaped_page() {
    let html = r#"<html><body>
      <span id="productTitle">
        Stainless Travel Tumbler,
        20oz
      </span>
      <span class="a-price"><span class="a-offscreen">$24.95</span></span>
      <img id="landingImage" src="//m.media.example.com/images/I/tumbler.jpg">
    </body></html>"#;

    let listing = scrape(html, "https://www.amazon.example/dp/B000TEST");

    assert_eq!(listing.name, "Stainless Travel Tumbler, 20oz");
    assert_eq!(listing.price, Decimal::from_str("24.95").unwrap());
    assert_eq!(listing.image, "https://m.media.example.com/images/I/tumbler.jpg");
}

#[test]
fn test_bare_page_resolves_every_default() {
    let listing = scrape("<html><body><p>hello</p></body></html>", SOURCE);

    assert_eq!(listing.name, DEFAULT_NAME);
    assert_eq!(listing.price, Decimal::ZERO);
    assert_eq!(listing.image, "");
    assert_eq!(listing.description, "");
}

#[test]
fn test_price_with_thousands_separator_in_messy_markup() {
    let html = r#"<html><body>
      <div class="product-price">
        Now only $1,234.50 (was $1,500)
      </div>
    </body></html>"#;

    let listing = scrape(html, SOURCE);
    assert_eq!(listing.price, Decimal::from_str("1234.50").unwrap());
}

#[test]
fn test_logo_only_page_yields_empty_image() {
    let html = r#"<html>
      <head><meta property="og:image" content="https://x.com/logo.png"></head>
      <body><img src="https://x.com/header-logo.svg"></body>
    </html>"#;

    let listing = scrape(html, SOURCE);
    assert_eq!(listing.image, "");
}

#[test]
fn test_root_relative_image_resolved_against_source_origin() {
    let html = r#"<html><body>
      <div class="product-image"><img src="/img/a.jpg"></div>
    </body></html>"#;

    let listing = scrape(html, "https://shop.example.com/p/1");
    assert_eq!(listing.image, "https://shop.example.com/img/a.jpg");
}

#[test]
fn test_long_description_truncated_to_500() {
    let description = "word ".repeat(200);
    let html = format!(
        r#"<html><head><meta name="description" content="{description}"></head></html>"#
    );

    let listing = scrape(&html, SOURCE);
    assert_eq!(listing.description.chars().count(), 500);
}

#[test]
fn test_microdata_fallbacks() {
    let html = r#"<html><body>
      <div itemscope>
        <span itemprop="name">Ceramic Pour-Over Set</span>
        <span itemprop="price" content="48.00">$48.00</span>
        <img itemprop="image" src="https://cdn.x.com/uploads/pourover.jpg">
        <div itemprop="description">A two-piece ceramic pour-over brewer and carafe.</div>
      </div>
    </body></html>"#;

    let listing = scrape(html, SOURCE);

    assert_eq!(listing.name, "Ceramic Pour-Over Set");
    assert_eq!(listing.price, Decimal::from_str("48.00").unwrap());
    assert_eq!(listing.image, "https://cdn.x.com/uploads/pourover.jpg");
    assert_eq!(
        listing.description,
        "A two-piece ceramic pour-over brewer and carafe."
    );
}
