use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use uuid::Uuid;

use crate::models::{Prediction, Schedule};
use crate::scoring::results::ResultIndex;
use crate::scoring::scorer::score_slot;
use crate::scoring::slots::{Slot, SlotKey, Split, build_universe};

/// A single member's season totals before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTotals {
    pub user_id: Uuid,
    pub total_points: i32,
    pub weeks: BTreeSet<i32>,
}

impl UserTotals {
    pub fn weeks_participated(&self) -> i32 {
        self.weeks.len() as i32
    }

    pub fn average_points(&self) -> f64 {
        if self.weeks.is_empty() {
            0.0
        } else {
            f64::from(self.total_points) / self.weeks.len() as f64
        }
    }
}

/// One leaderboard row. Ranks use standard competition ranking: equal totals
/// share a rank, and the next distinct total resumes at its 1-based index.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTotals {
    pub user_id: Uuid,
    pub total_points: i32,
    pub weeks_participated: i32,
    pub average_points: f64,
    pub rank: i64,
}

/// Groups predictions by member, keeping only picks that resolve to a slot in
/// the universe. A pick pointing outside it (unknown schedule, bad division
/// or split) is dropped with a warning rather than failing the computation.
/// Members whose every pick drops out are absent from the map entirely; the
/// map's key set is the leaderboard population.
pub(crate) fn picks_by_user(
    predictions: &[Prediction],
    universe: &HashSet<SlotKey>,
) -> BTreeMap<Uuid, HashMap<SlotKey, i32>> {
    let mut by_user: BTreeMap<Uuid, HashMap<SlotKey, i32>> = BTreeMap::new();

    for prediction in predictions {
        let key = Split::parse(&prediction.split).map(|split| SlotKey {
            schedule_id: prediction.schedule_id,
            division: prediction.division,
            split,
        });

        match key {
            Some(key) if universe.contains(&key) => {
                by_user
                    .entry(prediction.user_id)
                    .or_default()
                    .insert(key, prediction.driver_id);
            }
            _ => {
                tracing::warn!(
                    prediction_id = prediction.prediction_id,
                    user_id = %prediction.user_id,
                    schedule_id = prediction.schedule_id,
                    "skipping prediction that does not resolve to a slot"
                );
            }
        }
    }

    by_user
}

/// Scores every given slot for one member. Uncontested slots contribute to
/// neither points nor participation; contested slots always contribute, with
/// the absent-pick penalty standing in where no prediction was made.
pub fn user_totals(
    slots: &[Slot],
    picks: &HashMap<SlotKey, i32>,
    index: &ResultIndex,
    user_id: Uuid,
) -> UserTotals {
    let mut total_points = 0;
    let mut weeks = BTreeSet::new();

    for slot in slots {
        let score = score_slot(index.get(&slot.key), picks.get(&slot.key).copied());
        if let Some(points) = score.points() {
            total_points += points;
            weeks.insert(slot.week);
        }
    }

    UserTotals {
        user_id,
        total_points,
        weeks,
    }
}

/// Ranks the given population over one scoring window. Members who end up
/// with zero contested weeks in the window are left off the board: "no data
/// yet" is not the same as "zero points". Sorted ascending by total (golf),
/// ties broken by user id so repeated runs emit identical output.
pub(crate) fn rank_users(
    slots: &[Slot],
    by_user: &BTreeMap<Uuid, HashMap<SlotKey, i32>>,
    index: &ResultIndex,
) -> Vec<RankedTotals> {
    let mut totals: Vec<UserTotals> = by_user
        .iter()
        .map(|(user_id, picks)| user_totals(slots, picks, index, *user_id))
        .filter(|totals| !totals.weeks.is_empty())
        .collect();

    totals.sort_by(|a, b| {
        a.total_points
            .cmp(&b.total_points)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let mut ranked: Vec<RankedTotals> = Vec::with_capacity(totals.len());
    for (i, user) in totals.iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.total_points == user.total_points => prev.rank,
            _ => (i + 1) as i64,
        };
        ranked.push(RankedTotals {
            user_id: user.user_id,
            total_points: user.total_points,
            weeks_participated: user.weeks_participated(),
            average_points: user.average_points(),
            rank,
        });
    }

    ranked
}

/// Computes the full leaderboard for a season: every member with at least one
/// resolvable prediction, scored over every slot of the season to date.
pub fn season_leaderboard(
    schedules: &[Schedule],
    predictions: &[Prediction],
    index: &ResultIndex,
) -> Vec<RankedTotals> {
    let universe = build_universe(schedules);
    let keys: HashSet<SlotKey> = universe.iter().map(|slot| slot.key).collect();
    let by_user = picks_by_user(predictions, &keys);

    rank_users(&universe, &by_user, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RaceResult;

    fn schedule(schedule_id: i32, week: i32) -> Schedule {
        Schedule {
            schedule_id,
            season_id: 1,
            week,
            track: format!("Track {week}"),
            race_date: None,
        }
    }

    fn prediction(user_id: Uuid, schedule_id: i32, division: i16, split: &str, driver_id: i32) -> Prediction {
        Prediction {
            prediction_id: 0,
            user_id,
            schedule_id,
            division,
            split: split.to_string(),
            driver_id,
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    fn result(schedule_id: i32, division: i16, split: &str, driver_id: i32, pos: i32) -> RaceResult {
        RaceResult {
            result_id: 0,
            schedule_id,
            division,
            split: split.to_string(),
            driver_id,
            split_position: pos,
        }
    }

    fn user(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_member_without_predictions_is_omitted() {
        let schedules = [schedule(1, 1)];
        let predictions = [prediction(user(1), 1, 1, "gold", 7)];
        let index = ResultIndex::from_rows(&[result(1, 1, "gold", 7, 1)]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, user(1));
    }

    #[test]
    fn test_unresolvable_prediction_is_skipped_not_fatal() {
        let schedules = [schedule(1, 1)];
        // Second row points at a schedule outside the season.
        let predictions = [
            prediction(user(1), 1, 1, "gold", 7),
            prediction(user(2), 99, 1, "gold", 7),
        ];
        let index = ResultIndex::from_rows(&[result(1, 1, "gold", 7, 1)]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, user(1));
    }

    #[test]
    fn test_uncontested_slots_contribute_nothing() {
        // Two weeks in the universe, results only for week 1.
        let schedules = [schedule(1, 1), schedule(2, 2)];
        let predictions = [
            prediction(user(1), 1, 1, "gold", 7),
            prediction(user(1), 2, 1, "gold", 7),
        ];
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 7, 1),
            result(1, 1, "gold", 8, 2),
        ]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        assert_eq!(board[0].weeks_participated, 1);
        // Only the week-1 division-1 gold slot is contested; every other
        // slot of both weeks stays out of the total.
        assert_eq!(board[0].total_points, 1);
    }

    #[test]
    fn test_absent_pick_penalty_applies_to_every_contested_slot() {
        let schedules = [schedule(1, 1)];
        let predictions = [prediction(user(1), 1, 2, "silver", 7)];
        // Contested: division 1 gold (3 finishers) and division 2 silver.
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 10, 1),
            result(1, 1, "gold", 11, 2),
            result(1, 1, "gold", 12, 3),
            result(1, 2, "silver", 7, 1),
        ]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        // 1 for the correct silver pick + (3 + 1) for the unpicked gold slot.
        assert_eq!(board[0].total_points, 5);
        assert_eq!(board[0].weeks_participated, 1);
    }

    #[test]
    fn test_board_is_empty_while_nothing_is_contested() {
        let schedules = [schedule(1, 1)];
        let predictions = [prediction(user(1), 1, 1, "gold", 7)];
        let index = ResultIndex::from_rows(&[]);

        assert!(season_leaderboard(&schedules, &predictions, &index).is_empty());
    }

    #[test]
    fn test_average_points_guards_zero_weeks() {
        let totals = user_totals(&[], &HashMap::new(), &ResultIndex::from_rows(&[]), user(1));
        assert_eq!(totals.weeks_participated(), 0);
        assert_eq!(totals.average_points(), 0.0);
    }

    #[test]
    fn test_standard_competition_ranking() {
        let schedules = [schedule(1, 1)];
        // Two contested slots; u2 (2+1) and u3 (1+2) tie on 3 total.
        let predictions = [
            prediction(user(1), 1, 1, "gold", 10),
            prediction(user(1), 1, 1, "silver", 20),
            prediction(user(2), 1, 1, "gold", 11),
            prediction(user(2), 1, 1, "silver", 20),
            prediction(user(3), 1, 1, "gold", 10),
            prediction(user(3), 1, 1, "silver", 21),
            prediction(user(4), 1, 1, "gold", 12),
            prediction(user(4), 1, 1, "silver", 22),
        ];
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 10, 1),
            result(1, 1, "gold", 11, 2),
            result(1, 1, "gold", 12, 3),
            result(1, 1, "silver", 20, 1),
            result(1, 1, "silver", 21, 2),
            result(1, 1, "silver", 22, 3),
        ]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        let ranks: Vec<(i64, i32)> = board.iter().map(|e| (e.rank, e.total_points)).collect();
        // u1: 1+1=2, u2: 2+1=3, u3: 1+2=3, u4: 3+3=6.
        // Ties share rank 2; the next distinct total resumes at rank 4.
        assert_eq!(ranks, vec![(1, 2), (2, 3), (2, 3), (4, 6)]);
    }

    #[test]
    fn test_tied_members_order_deterministically_by_user_id() {
        let schedules = [schedule(1, 1)];
        let predictions = [
            prediction(user(9), 1, 1, "gold", 99),
            prediction(user(3), 1, 1, "gold", 98),
        ];
        let index = ResultIndex::from_rows(&[result(1, 1, "gold", 7, 1)]);

        let board = season_leaderboard(&schedules, &predictions, &index);
        assert_eq!(board[0].user_id, user(3));
        assert_eq!(board[1].user_id, user(9));
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].rank, 1);
    }

    #[test]
    fn test_leaderboard_is_deterministic() {
        let schedules = [schedule(1, 1), schedule(2, 2)];
        let predictions: Vec<Prediction> = (1..=5)
            .map(|n| prediction(user(n), 1, 1, "gold", 10 + n as i32))
            .collect();
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 11, 1),
            result(1, 1, "gold", 13, 2),
        ]);

        let first = season_leaderboard(&schedules, &predictions, &index);
        let second = season_leaderboard(&schedules, &predictions, &index);
        assert_eq!(first, second);
    }
}
