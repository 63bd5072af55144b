//! Configuration resolution
//!
//! Store paths come from CLI flags (with env fallback, see `cli`) or
//! are discovered in the Apple Books container directories under the
//! user's home. Discovery failure is fatal: without a store there is
//! nothing to export.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::cli::Cli;
use crate::db::{locate_store, ANNOTATION_CONTAINER, LIBRARY_CONTAINER};
use crate::error::{AppError, Result};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// AEAnnotation store (highlights and notes)
    pub annotations_db: PathBuf,
    /// BKLibrary store (asset catalog)
    pub library_db: PathBuf,
    /// Directory for exported Markdown files
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from parsed CLI arguments
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let annotations_db = match &cli.annotations_db {
            Some(path) => path.clone(),
            None => locate_store(&home_container(ANNOTATION_CONTAINER)?)?,
        };

        let library_db = match &cli.library_db {
            Some(path) => path.clone(),
            None => locate_store(&home_container(LIBRARY_CONTAINER)?)?,
        };

        Ok(Self {
            annotations_db,
            library_db,
            output_dir: cli.output.clone(),
        })
    }
}

fn home_container(relative: &str) -> Result<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| AppError::StoreNotFound("home directory unavailable".to_string()))?;
    Ok(base.home_dir().join(relative))
}
