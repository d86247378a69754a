//! Trove Server library.
//!
//! This crate provides the scrape + checkout API as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod routes;
pub mod state;
pub mod stripe;
