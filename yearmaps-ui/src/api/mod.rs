//! Backend API
//!
//! HTTP calls made by the gallery.

pub mod client;

pub use client::{fetch_providers, fetch_update_time};
