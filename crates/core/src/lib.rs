//! Trove Core - Shared types library.
//!
//! This crate provides common types used across all Trove components:
//! - `server` - Scrape + checkout API binary
//! - `integration-tests` - Cross-crate test suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product listings, cart items, and minor-unit money math

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
