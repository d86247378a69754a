//! Core types for Trove.
//!
//! This module provides the domain types shared between the scrape and
//! checkout paths.

pub mod cart;
pub mod listing;
pub mod money;

pub use cart::{CartItem, CheckoutSession};
pub use listing::ProductListing;
pub use money::{CURATION_FEE_RATE, curation_fee, from_minor_units, to_minor_units};
