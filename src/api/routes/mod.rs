//! API Routes
//!
//! Route handlers organized by functionality.

pub mod gallery;
pub mod health;
