//! YearMaps Gallery Catalog
//!
//! Keeps the list of published heat-maps and the last update time.
//!
//! - **types**: Provider records and catalog snapshots
//! - **scan**: Blocking image directory scan
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Config providers → scan(image_dir) → CatalogSnapshot → RwLock swap
//!                                                          ↑
//!                         background refresh (interval) ──┘
//! ```
//!
//! Readers clone the current snapshot; the refresh path is the only writer
//! and replaces the whole snapshot, so a reader never sees a half-built list.

pub mod error;
pub mod scan;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use scan::scan;
pub use types::{CatalogSnapshot, ProviderRecord, IMAGE_ROUTE};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::interval;

use crate::config::{GalleryConfig, ProviderConfig};

/// Shared catalog of published heat-maps
pub struct Catalog {
    gallery: GalleryConfig,
    providers: Arc<Vec<ProviderConfig>>,
    snapshot: RwLock<CatalogSnapshot>,
}

impl Catalog {
    /// Create an empty catalog, call [`Catalog::refresh`] to populate it
    pub fn new(gallery: GalleryConfig, providers: Vec<ProviderConfig>) -> Self {
        Self {
            gallery,
            providers: Arc::new(providers),
            snapshot: RwLock::new(CatalogSnapshot::default()),
        }
    }

    /// Rescan the image directory and swap in the new snapshot.
    ///
    /// Returns the number of published records. On error the previous
    /// snapshot stays in place.
    pub async fn refresh(&self) -> CatalogResult<usize> {
        let gallery = self.gallery.clone();
        let providers = Arc::clone(&self.providers);

        let snapshot = tokio::task::spawn_blocking(move || scan(&gallery, &providers)).await??;
        let published = snapshot.len();

        *self.snapshot.write().await = snapshot;
        Ok(published)
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn records(&self) -> Vec<ProviderRecord> {
        self.snapshot.read().await.records.clone()
    }

    pub async fn update_time(&self) -> String {
        self.snapshot.read().await.update_time.clone()
    }

    pub fn image_dir(&self) -> PathBuf {
        PathBuf::from(&self.gallery.image_dir)
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Start periodic rescans. Returns `None` when the interval is 0.
    pub fn start_background_refresh(self: &Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if self.gallery.refresh_interval_secs == 0 {
            return None;
        }

        let catalog = Arc::clone(self);
        let period = Duration::from_secs(catalog.gallery.refresh_interval_secs);

        Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first tick completes immediately; startup already scanned.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                match catalog.refresh().await {
                    Ok(published) => {
                        tracing::info!("Catalog refreshed: {} heat-maps published", published)
                    }
                    Err(e) => tracing::error!("Catalog refresh failed: {}", e),
                }
            }
        }))
    }
}
