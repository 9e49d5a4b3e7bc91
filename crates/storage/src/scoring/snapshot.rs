use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{Prediction, RaceResult, Schedule};
use crate::scoring::aggregate::{RankedTotals, picks_by_user, rank_users};
use crate::scoring::results::ResultIndex;
use crate::scoring::slots::{Slot, SlotKey, build_universe};

/// Week-over-week rank movement for one leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankMovement {
    /// prior rank - current rank: positive means the member moved up.
    pub change: i64,
    /// Member absent from the prior snapshot entirely.
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedWithMovement {
    pub totals: RankedTotals,
    pub movement: RankMovement,
}

/// Highest week number with at least one contested slot. The prior snapshot
/// boundary sits one week before this, so a scheduled week whose results have
/// not landed yet does not shift the comparison point.
fn max_contested_week(universe: &[Slot], index: &ResultIndex) -> Option<i32> {
    universe
        .iter()
        .filter(|slot| index.is_contested(&slot.key))
        .map(|slot| slot.week)
        .max()
}

/// Computes the season leaderboard twice, once over everything recorded so
/// far and once as it stood before the most recently contested week, and
/// annotates each current row with its rank movement between the two.
///
/// The population (every member with a resolvable season prediction) is the
/// same for both snapshots; only the scoring window shrinks for the prior
/// one. A member still drops out of a snapshot when its window holds no
/// contested week, which is what makes a first scored week mark everyone new.
///
/// Both snapshots are re-derived from the same row set on every call; no
/// historical rank state is kept anywhere.
pub fn leaderboard_with_movement(
    schedules: &[Schedule],
    predictions: &[Prediction],
    results: &[RaceResult],
) -> Vec<RankedWithMovement> {
    let index = ResultIndex::from_rows(results);
    let universe = build_universe(schedules);
    let keys: HashSet<SlotKey> = universe.iter().map(|slot| slot.key).collect();
    let by_user = picks_by_user(predictions, &keys);

    let current = rank_users(&universe, &by_user, &index);

    let boundary = max_contested_week(&universe, &index).map_or(0, |week| week - 1);

    let prior_ranks: HashMap<Uuid, i64> = if boundary < 1 {
        HashMap::new()
    } else {
        let window: Vec<Slot> = universe
            .iter()
            .filter(|slot| slot.week <= boundary)
            .copied()
            .collect();

        rank_users(&window, &by_user, &index)
            .into_iter()
            .map(|entry| (entry.user_id, entry.rank))
            .collect()
    };

    current
        .into_iter()
        .map(|totals| {
            let movement = match prior_ranks.get(&totals.user_id) {
                Some(prior_rank) => RankMovement {
                    change: prior_rank - totals.rank,
                    is_new: false,
                },
                None => RankMovement {
                    change: 0,
                    is_new: true,
                },
            };
            RankedWithMovement { totals, movement }
        })
        .collect()
}
