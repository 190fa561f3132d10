//! Image directory scan
//!
//! Blocking filesystem pass that turns the configured providers into a
//! catalog snapshot. Run it through `spawn_blocking` from async code.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write;
use std::path::Path;
use std::time::SystemTime;

use super::error::{CatalogError, CatalogResult};
use super::types::{CatalogSnapshot, ProviderRecord};
use crate::config::{GalleryConfig, ProviderConfig};

/// Build a snapshot from the providers whose images exist in `image_dir`
pub fn scan(gallery: &GalleryConfig, providers: &[ProviderConfig]) -> CatalogResult<CatalogSnapshot> {
    let image_dir = Path::new(&gallery.image_dir);

    let meta = std::fs::metadata(image_dir).map_err(|e| CatalogError::ImageDir {
        path: image_dir.to_path_buf(),
        error: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(CatalogError::ImageDir {
            path: image_dir.to_path_buf(),
            error: "not a directory".to_string(),
        });
    }

    let mut records = Vec::with_capacity(providers.len());
    let mut latest: Option<SystemTime> = None;

    for provider in providers {
        let file = provider.image_file();
        let path = image_dir.join(&file);

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                if let Ok(modified) = meta.modified() {
                    latest = latest.max(Some(modified));
                }
                records.push(ProviderRecord::new(
                    &provider.id,
                    provider.display_name(),
                    &file,
                ));
            }
            Ok(_) => {
                tracing::warn!(provider = %provider.id, path = ?path, "Image is not a regular file, skipping");
            }
            Err(e) => {
                tracing::warn!(provider = %provider.id, path = ?path, "Image not available, skipping: {}", e);
            }
        }
    }

    let update_time = latest
        .map(|t| format_time(t, &gallery.time_format))
        .unwrap_or_default();

    tracing::debug!(
        published = records.len(),
        configured = providers.len(),
        update_time = %update_time,
        "Catalog scan finished"
    );

    Ok(CatalogSnapshot {
        records,
        update_time,
        built_at: Some(Utc::now()),
    })
}

/// Format a file time in local time, falling back to RFC 3339
fn format_time(time: SystemTime, format: &str) -> String {
    let local: DateTime<Local> = time.into();
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        return local.to_rfc3339();
    }
    out
}
