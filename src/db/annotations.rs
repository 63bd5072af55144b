//! Annotation store queries
//!
//! Reads the `ZAEANNOTATION` table of the AEAnnotation store. Rows are
//! pre-ordered by `(asset id, range start)`; the definitive reading
//! order is established afterwards by the sequencer.

use sqlx::SqlitePool;

use crate::annotations::Annotation;
use crate::error::Result;

/// Annotation store repository
pub struct AnnotationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnnotationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every annotation row in the store
    pub async fn list_all(&self) -> Result<Vec<Annotation>> {
        let records = sqlx::query_as::<_, Annotation>(
            r#"
            SELECT ZANNOTATIONASSETID AS asset_id,
                   ZANNOTATIONREPRESENTATIVETEXT AS representative_text,
                   ZANNOTATIONSELECTEDTEXT AS selected_text,
                   ZFUTUREPROOFING5 AS chapter,
                   ZANNOTATIONSTYLE AS style,
                   ZPLLOCATIONRANGESTART AS location_start,
                   ZANNOTATIONLOCATION AS location
            FROM ZAEANNOTATION
            WHERE ZANNOTATIONASSETID IS NOT NULL
            ORDER BY ZANNOTATIONASSETID, ZPLLOCATIONRANGESTART
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
