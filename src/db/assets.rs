//! Asset catalog queries
//!
//! Reads book metadata from the `ZBKLIBRARYASSET` table of the
//! BKLibrary store. The catalog is a pure lookup: annotations whose
//! asset has no entry are still exported under their asset id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Book metadata from the library catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub asset_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    /// Placeholder entry for an asset missing from the catalog
    pub fn unknown(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            title: None,
            author: None,
        }
    }

    /// Title for display and file naming, falling back to the asset id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.asset_id)
    }

    /// Author for display
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown author")
    }
}

/// Asset catalog repository
pub struct AssetRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AssetRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All catalog entries, in title order
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT DISTINCT ZASSETID AS asset_id,
                   ZTITLE AS title,
                   ZAUTHOR AS author
            FROM ZBKLIBRARYASSET
            WHERE ZASSETID IS NOT NULL
            ORDER BY ZTITLE
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// The catalog as an asset-id lookup table
    pub async fn catalog(&self) -> Result<HashMap<String, Book>> {
        let books = self.list_books().await?;

        Ok(books
            .into_iter()
            .map(|book| (book.asset_id.clone(), book))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store;
    use sqlx::sqlite::SqliteConnectOptions;
    use std::str::FromStr;

    async fn fixture_catalog(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("BKLibrary_test.sqlite");
        let options =
            SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))
                .unwrap()
                .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await.unwrap();

        sqlx::query(
            r#"
            CREATE TABLE ZBKLIBRARYASSET (
                ZASSETID TEXT,
                ZTITLE TEXT,
                ZAUTHOR TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            r#"
            INSERT INTO ZBKLIBRARYASSET VALUES
            ('asset-1', 'A Book', 'Some Author'),
            ('asset-2', NULL, NULL)
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        pool.close().await;
        path
    }

    #[tokio::test]
    async fn test_catalog_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture_catalog(dir.path()).await;

        let pool = open_store(&path).await.unwrap();
        let catalog = AssetRepository::new(&pool).catalog().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["asset-1"].display_title(), "A Book");
        assert_eq!(catalog["asset-1"].display_author(), "Some Author");

        // Catalog rows with no metadata fall back like missing ones
        assert_eq!(catalog["asset-2"].display_title(), "asset-2");
        assert_eq!(catalog["asset-2"].display_author(), "Unknown author");
    }

    #[test]
    fn test_unknown_book_fallbacks() {
        let book = Book::unknown("XYZ");
        assert_eq!(book.display_title(), "XYZ");
        assert_eq!(book.display_author(), "Unknown author");
    }
}
