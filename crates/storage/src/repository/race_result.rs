use sqlx::PgPool;

use crate::error::Result;
use crate::models::RaceResult;

/// Repository for RaceResult database operations
pub struct RaceResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All recorded finishes for the given race weeks
    pub async fn list_by_schedules(&self, schedule_ids: &[i32]) -> Result<Vec<RaceResult>> {
        if schedule_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT result_id, schedule_id, division, split, driver_id, split_position
            FROM race_results
            WHERE schedule_id = ANY($1)
            "#,
        )
        .bind(schedule_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
