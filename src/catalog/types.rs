//! Catalog data types
//!
//! Provider records are serialized as plain JSON string arrays, which is the
//! shape the gallery front-end reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// URL prefix under which image files are served
pub const IMAGE_ROUTE: &str = "images";

/// One published heat-map: `[id, name, image_path]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderRecord(Vec<String>);

impl ProviderRecord {
    /// The image file name is percent-encoded so `record[2]` is a valid URL path
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_file: &str) -> Self {
        Self(vec![
            id.into(),
            name.into(),
            format!("{}/{}", IMAGE_ROUTE, urlencoding::encode(image_file)),
        ])
    }

    pub fn id(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Path of the image relative to the site root
    pub fn image_path(&self) -> Option<&str> {
        self.0.get(2).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

/// Immutable view of the catalog, swapped wholesale on every rebuild
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    /// Records in configuration order
    pub records: Vec<ProviderRecord>,
    /// Latest image modification time, empty when nothing is published
    pub update_time: String,
    /// When the snapshot was built, `None` before the first scan
    pub built_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
