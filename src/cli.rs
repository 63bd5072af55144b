//! Command-line interface
//!
//! ```bash
//! # Export every book's highlights to ./books
//! subrayado
//!
//! # Export a single book somewhere else
//! subrayado -o ~/notes --book "Writing to Learn"
//!
//! # List library entries without exporting
//! subrayado --list
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Export Apple Books highlights and notes to Markdown
#[derive(Debug, Parser)]
#[command(name = "subrayado", version, about)]
pub struct Cli {
    /// Output directory for exported Markdown files
    #[arg(short, long, default_value = "books")]
    pub output: PathBuf,

    /// List library entries instead of exporting
    #[arg(long)]
    pub list: bool,

    /// Export only the book with this title
    #[arg(long)]
    pub book: Option<String>,

    /// Path to the AEAnnotation store (skips discovery)
    #[arg(long, env = "SUBRAYADO_ANNOTATIONS_DB")]
    pub annotations_db: Option<PathBuf>,

    /// Path to the BKLibrary store (skips discovery)
    #[arg(long, env = "SUBRAYADO_LIBRARY_DB")]
    pub library_db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
