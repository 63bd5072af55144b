//! Error types for the exporter

use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Only systemic failures surface here. Per-record problems (a
/// malformed location fragment, a missing catalog entry) degrade in
/// place instead of erroring, so one bad annotation never blocks an
/// export.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No Apple Books store found in {0}")]
    StoreNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
