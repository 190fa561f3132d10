//! # YearMaps
//!
//! Gallery server for generated year heat-maps. Publishes the images found in
//! an image directory together with their last update time, for the
//! `yearmaps-ui` front-end to display.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`catalog`]: Published heat-map records and the background rescan
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yearmaps::{serve, AppState, Catalog, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     config.validate()?;
//!
//!     let catalog = Arc::new(Catalog::new(config.gallery, config.providers));
//!     let published = catalog.refresh().await?;
//!     println!("Publishing {} heat-maps", published);
//!
//!     serve(AppState::new(catalog, config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use catalog::{Catalog, CatalogError, CatalogSnapshot, ProviderRecord};

pub use config::{
    Config, ConfigError, GalleryConfig, LoggingConfig, ProviderConfig, ServerConfig,
};
