//! Read-only access to the Apple Books SQLite stores
//!
//! Apple Books keeps annotations and library metadata in two separate
//! databases under its container, each with a machine-specific hashed
//! filename, so discovery globs for `*.sqlite` rather than assuming a
//! name.

mod annotations;
mod assets;

pub use annotations::AnnotationRepository;
pub use assets::{AssetRepository, Book};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{AppError, Result};

/// Annotation store directory, relative to the user's home
pub const ANNOTATION_CONTAINER: &str =
    "Library/Containers/com.apple.iBooksX/Data/Documents/AEAnnotation";

/// Library (asset catalog) directory, relative to the user's home
pub const LIBRARY_CONTAINER: &str =
    "Library/Containers/com.apple.iBooksX/Data/Documents/BKLibrary";

/// Open a read-only connection pool on an existing store
pub async fn open_store(path: &Path) -> Result<SqlitePool> {
    let url = format!("sqlite:{}", path.display());
    let options = SqliteConnectOptions::from_str(&url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Find the store file inside a container directory
///
/// Returns the first `*.sqlite` entry. The filename is not stable
/// across machines, but each container holds exactly one store.
pub fn locate_store(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .map_err(|_| AppError::StoreNotFound(dir.display().to_string()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sqlite"))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::StoreNotFound(dir.display().to_string()))
}
