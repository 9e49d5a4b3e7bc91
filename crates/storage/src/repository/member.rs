use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;

/// Repository for Member database operations
pub struct MemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Display names for the given members. Ids with no member row are
    /// simply absent from the map; callers substitute a placeholder.
    pub async fn display_names(&self, user_ids: &[Uuid]) -> Result<HashMap<Uuid, String>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, String)> = sqlx::query_as(
            r#"
            SELECT user_id, display_name
            FROM members
            WHERE user_id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
