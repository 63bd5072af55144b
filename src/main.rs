//! Subrayado
//!
//! Exports Apple Books highlights and notes to one Markdown document
//! per book, ordered by position in the text.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod annotations;
mod cfi;
mod cli;
mod config;
mod db;
mod error;
mod export;

use annotations::order;
use cli::Cli;
use config::Config;
use db::{open_store, AnnotationRepository, AssetRepository, Book};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "subrayado=debug"
    } else {
        "subrayado=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::resolve(&cli).context("failed to locate the Apple Books stores")?;
    tracing::debug!("annotation store: {}", config.annotations_db.display());
    tracing::debug!("library store: {}", config.library_db.display());

    if cli.list {
        list_books(&config).await
    } else {
        export_books(&config, cli.book.as_deref()).await
    }
}

/// Print the library catalog without exporting
async fn list_books(config: &Config) -> anyhow::Result<()> {
    let pool = open_store(&config.library_db).await?;
    let books = AssetRepository::new(&pool).list_books().await?;

    for book in books {
        println!(
            "{}\t{}\t{}",
            book.asset_id,
            book.display_title(),
            book.display_author()
        );
    }

    Ok(())
}

/// Export highlights, one Markdown document per book
async fn export_books(config: &Config, only_title: Option<&str>) -> anyhow::Result<()> {
    let annotation_pool = open_store(&config.annotations_db).await?;
    let library_pool = open_store(&config.library_db).await?;

    let records = AnnotationRepository::new(&annotation_pool)
        .list_all()
        .await?;
    let catalog = AssetRepository::new(&library_pool).catalog().await?;

    let groups = order(records);
    if groups.is_empty() {
        tracing::info!("no highlights found, nothing to export");
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("cannot create {}", config.output_dir.display()))?;

    let mut exported = 0usize;
    for (asset_id, highlights) in &groups {
        let book = catalog
            .get(asset_id)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!("asset {asset_id} missing from the library catalog");
                Book::unknown(asset_id)
            });

        if let Some(only) = only_title {
            if book.display_title() != only {
                continue;
            }
        }

        let path = export::write_book(&config.output_dir, &book, highlights)?;
        tracing::info!(
            "exported {} highlights from \"{}\" to {}",
            highlights.len(),
            book.display_title(),
            path.display()
        );
        exported += 1;
    }

    if exported == 0 {
        if let Some(only) = only_title {
            tracing::warn!("no book titled \"{only}\" has highlights");
        }
    }

    Ok(())
}
