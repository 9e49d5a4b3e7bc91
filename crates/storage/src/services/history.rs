use std::collections::{BTreeMap, HashMap, HashSet};

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::history::{OutcomeKind, PredictionOutcome, UserHistoryResponse, WeeklyScore};
use crate::error::Result;
use crate::models::Schedule;
use crate::repository::driver::DriverRepository;
use crate::repository::member::MemberRepository;
use crate::repository::prediction::PredictionRepository;
use crate::repository::race_result::RaceResultRepository;
use crate::repository::schedule::ScheduleRepository;
use crate::scoring::aggregate::picks_by_user;
use crate::scoring::{ResultIndex, SlotKey, SlotScore, build_universe, score_slot};

/// One member's scored season: a row for every contested slot (penalties
/// included), per-week rollups and the season total. A member with no
/// resolvable prediction in the season gets the empty history, mirroring
/// their absence from the leaderboard.
pub async fn compute_user_history(
    pool: &PgPool,
    user_id: Uuid,
    season_id: i32,
) -> Result<UserHistoryResponse> {
    let schedules = ScheduleRepository::new(pool).list_by_season(season_id).await?;
    let schedule_ids: Vec<i32> = schedules.iter().map(|s| s.schedule_id).collect();

    let predictions = PredictionRepository::new(pool)
        .list_for_user(user_id, season_id)
        .await?;
    let results = RaceResultRepository::new(pool)
        .list_by_schedules(&schedule_ids)
        .await?;

    let display_name = MemberRepository::new(pool)
        .display_names(&[user_id])
        .await?
        .remove(&user_id)
        .unwrap_or_else(|| super::UNKNOWN_MEMBER.to_string());

    let universe = build_universe(&schedules);
    let keys: HashSet<SlotKey> = universe.iter().map(|slot| slot.key).collect();
    let picks = picks_by_user(&predictions, &keys)
        .remove(&user_id)
        .unwrap_or_default();

    if picks.is_empty() {
        return Ok(UserHistoryResponse {
            user_id,
            display_name,
            predictions: Vec::new(),
            weekly_scores: Vec::new(),
            total_score: 0,
        });
    }

    let driver_ids: Vec<i32> = {
        let unique: HashSet<i32> = picks.values().copied().collect();
        unique.into_iter().collect()
    };
    let driver_names = DriverRepository::new(pool).names_by_ids(&driver_ids).await?;

    let schedules_by_id: HashMap<i32, &Schedule> = schedules
        .iter()
        .map(|schedule| (schedule.schedule_id, schedule))
        .collect();

    let index = ResultIndex::from_rows(&results);
    let mut outcomes = Vec::new();
    let mut weekly: BTreeMap<i32, i32> = BTreeMap::new();
    let mut total_score = 0;

    // Universe order is week, then division, then split, so the rows come
    // out the way the site lists them.
    for slot in &universe {
        let pick = picks.get(&slot.key).copied();
        let score = score_slot(index.get(&slot.key), pick);
        let Some(points) = score.points() else {
            continue;
        };

        let outcome = match score {
            SlotScore::Scored(_) => OutcomeKind::Scored,
            _ => OutcomeKind::Penalized,
        };
        let predicted_driver = pick.map(|driver_id| {
            driver_names
                .get(&driver_id)
                .cloned()
                .unwrap_or_else(|| super::UNKNOWN_DRIVER.to_string())
        });
        let track = schedules_by_id
            .get(&slot.key.schedule_id)
            .map(|schedule| schedule.track.clone())
            .unwrap_or_default();

        outcomes.push(PredictionOutcome {
            week: slot.week,
            track,
            division: slot.key.division,
            split: slot.key.split,
            predicted_driver,
            points,
            outcome,
        });
        *weekly.entry(slot.week).or_insert(0) += points;
        total_score += points;
    }

    Ok(UserHistoryResponse {
        user_id,
        display_name,
        predictions: outcomes,
        weekly_scores: weekly
            .into_iter()
            .map(|(week, points)| WeeklyScore { week, points })
            .collect(),
        total_score,
    })
}
