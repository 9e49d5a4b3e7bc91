use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::error::Result;
use crate::repository::member::MemberRepository;
use crate::repository::prediction::PredictionRepository;
use crate::repository::race_result::RaceResultRepository;
use crate::repository::schedule::ScheduleRepository;
use crate::scoring;

/// Fetches a season's rows and runs the scoring engine over them. Any fetch
/// error aborts the whole computation: a leaderboard ranked against a partial
/// row set would silently misplace members. Only the display-name join is
/// allowed to come back partial.
pub async fn compute_leaderboard(pool: &PgPool, season_id: i32) -> Result<Vec<LeaderboardEntry>> {
    let schedules = ScheduleRepository::new(pool).list_by_season(season_id).await?;
    if schedules.is_empty() {
        return Ok(Vec::new());
    }

    let schedule_ids: Vec<i32> = schedules.iter().map(|s| s.schedule_id).collect();
    let predictions = PredictionRepository::new(pool).list_by_season(season_id).await?;
    let results = RaceResultRepository::new(pool)
        .list_by_schedules(&schedule_ids)
        .await?;

    let ranked = scoring::leaderboard_with_movement(&schedules, &predictions, &results);

    let user_ids: Vec<Uuid> = ranked.iter().map(|entry| entry.totals.user_id).collect();
    let names = MemberRepository::new(pool).display_names(&user_ids).await?;

    let entries = ranked
        .into_iter()
        .map(|entry| {
            let display_name = match names.get(&entry.totals.user_id) {
                Some(name) => name.clone(),
                None => {
                    tracing::warn!(
                        user_id = %entry.totals.user_id,
                        "member row missing for leaderboard entry"
                    );
                    super::UNKNOWN_MEMBER.to_string()
                }
            };
            LeaderboardEntry::from_ranked(entry, display_name)
        })
        .collect();

    Ok(entries)
}
