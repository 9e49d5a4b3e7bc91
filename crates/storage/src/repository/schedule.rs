use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Schedule;

/// Repository for Schedule (race week) database operations
pub struct ScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Race weeks of a season in week order
    pub async fn list_by_season(&self, season_id: i32) -> Result<Vec<Schedule>> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, season_id, week, track, race_date
            FROM schedules
            WHERE season_id = $1
            ORDER BY week
            "#,
        )
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(schedules)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Schedule> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, season_id, week, track, race_date
            FROM schedules
            WHERE schedule_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(schedule)
    }
}
