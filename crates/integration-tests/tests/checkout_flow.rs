//! Cart pricing and provider wire-shape tests.
//!
//! Covers the whole checkout builder short of the network call: minor-unit
//! conversion, the synthetic fee line, and the exact form parameters a
//! session is created with.

use rust_decimal::Decimal;
use std::str::FromStr;

use trove_core::{CartItem, from_minor_units, to_minor_units};
use trove_server::stripe::checkout::{self, FEE_LINE_NAME};
use trove_server::stripe::client::{SessionRequest, session_form_params};

fn cart() -> Vec<CartItem> {
    vec![
        CartItem {
            name: "Walnut Desk Organizer".to_string(),
            base_price: Decimal::from_str("89.00").unwrap(),
            quantity: 1,
            image: Some("https://cdn.example.com/desk.jpg".to_string()),
            source_url: Some("https://shop.example.com/p/42".to_string()),
        },
        CartItem {
            name: "Aurora Table Lamp".to_string(),
            base_price: Decimal::from_str("129.00").unwrap(),
            quantity: 2,
            image: None,
            source_url: Some("https://shop.example.com/p/7".to_string()),
        },
    ]
}

#[test]
fn test_two_item_cart_pricing() {
    let plan = checkout::plan(&cart());

    // 8900 + 2 * 12900
    assert_eq!(plan.subtotal, 34_700);
    assert_eq!(plan.fee, 3_470);
    assert_eq!(plan.total, 38_170);

    // Two item lines plus exactly one fee line, fee last
    assert_eq!(plan.line_items.len(), 3);
    let last = plan.line_items.last().expect("fee line present");
    assert_eq!(last.name, FEE_LINE_NAME);
    assert_eq!(last.quantity, 1);
    assert_eq!(last.unit_amount, 3_470);
}

#[test]
fn test_metadata_round_trips_as_json() {
    let plan = checkout::plan(&cart());
    let items: serde_json::Value =
        serde_json::from_str(&plan.order_items_metadata).expect("metadata is JSON");

    assert_eq!(items.as_array().map(Vec::len), Some(2));
    assert_eq!(items[1]["name"], "Aurora Table Lamp");
    assert_eq!(items[1]["qty"], 2);
    assert_eq!(items[1]["source"], "https://shop.example.com/p/7");
}

#[test]
fn test_form_params_cover_every_line() {
    let plan = checkout::plan(&cart());
    let request = SessionRequest {
        success_url: "https://front.example?success=true".to_string(),
        cancel_url: "https://front.example?canceled=true".to_string(),
        customer_email: None,
        allowed_ship_countries: vec!["US".to_string(), "CA".to_string(), "GB".to_string(), "AU".to_string()],
    };
    let params = session_form_params(&plan, &request);

    let count = |prefix: &str| params.iter().filter(|(k, _)| k.starts_with(prefix)).count();

    assert_eq!(count("line_items[0]"), 5); // currency, name, image, unit_amount, quantity
    assert_eq!(count("line_items[1]"), 4); // no image on the second item
    assert_eq!(count("line_items[2]"), 5); // fee line carries a description
    assert_eq!(count("shipping_address_collection"), 4);
    assert!(
        !params.iter().any(|(k, _)| k == "customer_email"),
        "absent email must not produce an empty param"
    );
}

#[test]
fn test_minor_unit_round_trip_for_order_log() {
    // The webhook log converts the provider's amount_total back to dollars.
    let charged = to_minor_units(Decimal::from_str("381.70").unwrap());
    assert_eq!(charged, 38_170);
    assert_eq!(from_minor_units(charged), Decimal::from_str("381.70").unwrap());
}

#[test]
fn test_fractional_price_rounds_once_per_amount() {
    let items = vec![CartItem {
        name: "Odd Sticker".to_string(),
        base_price: Decimal::from_str("0.335").unwrap(),
        quantity: 3,
        image: None,
        source_url: None,
    }];
    let plan = checkout::plan(&items);

    // Line total 1.005 -> 101 in one rounding step; unit rounds separately
    assert_eq!(plan.subtotal, 101);
    assert_eq!(plan.line_items[0].unit_amount, 34);
    assert_eq!(plan.fee, 10);
}
