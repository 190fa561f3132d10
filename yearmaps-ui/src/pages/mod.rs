//! Pages
//!
//! Top-level page components.

pub mod gallery;

pub use gallery::Gallery;
