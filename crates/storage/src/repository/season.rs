use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Season;

/// Repository for Season database operations
pub struct SeasonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all seasons, newest first
    pub async fn list(&self) -> Result<Vec<Season>> {
        let seasons = sqlx::query_as::<_, Season>(
            r#"
            SELECT season_id, name, slug, status, prediction_deadline,
                   week_one_deadline, created_at
            FROM seasons
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(seasons)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(
            r#"
            SELECT season_id, name, slug, status, prediction_deadline,
                   week_one_deadline, created_at
            FROM seasons
            WHERE season_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(
            r#"
            SELECT season_id, name, slug, status, prediction_deadline,
                   week_one_deadline, created_at
            FROM seasons
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }
}
