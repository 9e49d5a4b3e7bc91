use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::Result;

/// Repository for Driver database operations
pub struct DriverRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DriverRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Driver names for the given ids. Ids with no driver row are absent
    /// from the map; callers substitute a placeholder.
    pub async fn names_by_ids(&self, driver_ids: &[i32]) -> Result<HashMap<i32, String>> {
        if driver_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = sqlx::query_as(
            r#"
            SELECT driver_id, name
            FROM drivers
            WHERE driver_id = ANY($1)
            "#,
        )
        .bind(driver_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
