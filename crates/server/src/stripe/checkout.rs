//! Checkout planning: fee math and provider line items.
//!
//! Turns caller-supplied cart items into the line-item list a hosted
//! session is created with: one price-bearing entry per item plus exactly
//! one synthetic entry for the 10% curation fee.

use serde_json::json;
use trove_core::{CartItem, curation_fee, to_minor_units};

/// Display name of the synthetic fee line.
pub const FEE_LINE_NAME: &str = "Finder's Fee (10%)";

/// Description of the synthetic fee line.
pub const FEE_LINE_DESCRIPTION: &str = "Curation and sourcing fee";

/// One provider line item, amounts already in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Per-unit amount in minor units.
    pub unit_amount: i64,
    pub quantity: u32,
}

/// A priced checkout ready to be sent to the provider.
///
/// The total is computed for logging only; it is never reconciled against
/// the provider's own sum. The provider is the source of truth for the
/// final charge.
#[derive(Debug, Clone)]
pub struct CheckoutPlan {
    pub line_items: Vec<LineItem>,
    /// Item subtotal in minor units.
    pub subtotal: i64,
    /// Curation fee in minor units.
    pub fee: i64,
    /// Subtotal plus fee, minor units.
    pub total: i64,
    /// Compact `{name, qty, source}` summary per item, JSON-encoded for the
    /// provider's metadata field. This round-trips through the provider and
    /// is the only persistence of order contents in the system.
    pub order_items_metadata: String,
}

/// Price a cart: convert each line to minor units once, then fee the
/// already-rounded subtotal.
#[must_use]
pub fn plan(items: &[CartItem]) -> CheckoutPlan {
    let subtotal: i64 = items
        .iter()
        .map(|item| {
            item.base_price
                .checked_mul(rust_decimal::Decimal::from(item.quantity))
                .map_or(0, to_minor_units)
        })
        .sum();
    let fee = curation_fee(subtotal);

    let mut line_items: Vec<LineItem> = items
        .iter()
        .map(|item| LineItem {
            name: item.name.clone(),
            description: None,
            image: item.image.clone().filter(|i| !i.is_empty()),
            unit_amount: to_minor_units(item.base_price),
            quantity: item.quantity,
        })
        .collect();

    line_items.push(LineItem {
        name: FEE_LINE_NAME.to_string(),
        description: Some(FEE_LINE_DESCRIPTION.to_string()),
        image: None,
        unit_amount: fee,
        quantity: 1,
    });

    let order_items_metadata = serde_json::to_string(
        &items
            .iter()
            .map(|item| {
                json!({
                    "name": item.name,
                    "qty": item.quantity,
                    "source": item.source_url,
                })
            })
            .collect::<Vec<_>>(),
    )
    .unwrap_or_else(|_| "[]".to_string());

    CheckoutPlan {
        line_items,
        subtotal,
        fee,
        total: subtotal + fee,
        order_items_metadata,
    }
}
