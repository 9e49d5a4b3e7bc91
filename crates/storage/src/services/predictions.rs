use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::prediction::SubmitPredictionRequest;
use crate::error::{Result, StorageError};
use crate::models::{Prediction, Schedule, Season};
use crate::repository::prediction::PredictionRepository;
use crate::repository::schedule::ScheduleRepository;
use crate::repository::season::SeasonRepository;

/// Inserts or replaces one pick after checking the season's submission
/// windows against the caller-supplied clock.
pub async fn submit_prediction(
    pool: &PgPool,
    req: &SubmitPredictionRequest,
    now: DateTime<Utc>,
) -> Result<Prediction> {
    let schedule = ScheduleRepository::new(pool).find_by_id(req.schedule_id).await?;
    let season = SeasonRepository::new(pool).find_by_id(schedule.season_id).await?;

    ensure_window_open(&season, &schedule, now)?;

    PredictionRepository::new(pool).upsert(req).await
}

/// One member's picks for a season.
pub async fn list_user_predictions(
    pool: &PgPool,
    user_id: Uuid,
    season_id: i32,
) -> Result<Vec<Prediction>> {
    PredictionRepository::new(pool)
        .list_for_user(user_id, season_id)
        .await
}

/// Week-1 picks freeze at their own earlier deadline so already-scored
/// history cannot be rewritten; every other week stays open until the
/// season's general deadline.
fn ensure_window_open(season: &Season, schedule: &Schedule, now: DateTime<Utc>) -> Result<()> {
    if schedule.week == 1 && now >= season.week_one_deadline {
        return Err(StorageError::PredictionLocked(format!(
            "week 1 of '{}' locked at {}",
            season.slug, season.week_one_deadline
        )));
    }

    if now >= season.prediction_deadline {
        return Err(StorageError::PredictionLocked(format!(
            "'{}' closed for predictions at {}",
            season.slug, season.prediction_deadline
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn season() -> Season {
        Season {
            season_id: 1,
            name: "Season 5".to_string(),
            slug: "season-5".to_string(),
            status: "open".to_string(),
            prediction_deadline: Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
            week_one_deadline: Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap(),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn schedule(week: i32) -> Schedule {
        Schedule {
            schedule_id: week,
            season_id: 1,
            week,
            track: "Brands Hatch".to_string(),
            race_date: None,
        }
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_week_one_locks_at_its_own_deadline() {
        let season = season();

        assert!(ensure_window_open(&season, &schedule(1), at(2024, 1, 7)).is_ok());
        assert!(matches!(
            ensure_window_open(&season, &schedule(1), at(2024, 1, 9)),
            Err(StorageError::PredictionLocked(_))
        ));
    }

    #[test]
    fn test_later_weeks_stay_open_past_the_week_one_deadline() {
        let season = season();

        // Well after the week-1 cutoff but before the general deadline.
        assert!(ensure_window_open(&season, &schedule(2), at(2024, 2, 15)).is_ok());
        assert!(ensure_window_open(&season, &schedule(10), at(2024, 2, 15)).is_ok());
    }

    #[test]
    fn test_general_deadline_locks_every_week() {
        let season = season();

        for week in [1, 2, 10] {
            assert!(matches!(
                ensure_window_open(&season, &schedule(week), at(2024, 3, 2)),
                Err(StorageError::PredictionLocked(_))
            ));
        }
    }
}
