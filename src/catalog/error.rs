//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the gallery catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The image directory is missing or unreadable
    #[error("Image directory {path:?} is not usable: {error}")]
    ImageDir { path: PathBuf, error: String },

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking scan task panicked or was cancelled
    #[error("Scan task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for CatalogError {
    fn from(err: tokio::task::JoinError) -> Self {
        CatalogError::Task(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
