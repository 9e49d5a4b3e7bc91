use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardEntry, error::Result, repository::season::SeasonRepository,
    services::leaderboard,
};

/// Compute the full ranked leaderboard for a season. The whole field is
/// always scored; pagination happens at the handler.
pub async fn get_season_leaderboard(pool: &PgPool, slug: &str) -> Result<Vec<LeaderboardEntry>> {
    let season = SeasonRepository::new(pool).find_by_slug(slug).await?;

    leaderboard::compute_leaderboard(pool, season.season_id).await
}
