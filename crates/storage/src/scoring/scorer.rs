use crate::scoring::results::SlotResults;

/// Outcome of scoring one slot for one member. Golf scoring: lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotScore {
    /// The predicted driver has a recorded finish; points = their position.
    Scored(i32),
    /// Contested slot with no usable pick: either the predicted driver has no
    /// recorded finish (DNF / no-show) or no prediction was made at all.
    /// Both cases score participant_count + 1, one place worse than every
    /// actual participant. `predicted` keeps the two distinguishable for
    /// display without changing the points.
    Penalized { points: i32, predicted: bool },
    /// No result recorded for the slot yet; contributes nothing.
    Uncontested,
}

impl SlotScore {
    pub fn points(&self) -> Option<i32> {
        match self {
            Self::Scored(points) => Some(*points),
            Self::Penalized { points, .. } => Some(*points),
            Self::Uncontested => None,
        }
    }

    pub fn is_contested(&self) -> bool {
        !matches!(self, Self::Uncontested)
    }
}

/// Scores one slot. Rules in priority order:
/// 1. no results for the slot -> Uncontested;
/// 2. predicted driver has a recorded finish -> Scored(split_position);
/// 3. anything else -> Penalized(participant_count + 1).
pub fn score_slot(results: Option<&SlotResults>, predicted_driver: Option<i32>) -> SlotScore {
    let Some(results) = results else {
        return SlotScore::Uncontested;
    };
    if results.participant_count() == 0 {
        return SlotScore::Uncontested;
    }

    match predicted_driver {
        Some(driver_id) => match results.position_of(driver_id) {
            Some(position) => SlotScore::Scored(position),
            None => SlotScore::Penalized {
                points: results.participant_count() + 1,
                predicted: true,
            },
        },
        None => SlotScore::Penalized {
            points: results.participant_count() + 1,
            predicted: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RaceResult;
    use crate::scoring::results::ResultIndex;
    use crate::scoring::slots::{SlotKey, Split};

    fn three_finisher_slot() -> (ResultIndex, SlotKey) {
        let rows: Vec<RaceResult> = (1..=3)
            .map(|pos| RaceResult {
                result_id: pos,
                schedule_id: 1,
                division: 1,
                split: "gold".to_string(),
                driver_id: 100 + pos,
                split_position: pos,
            })
            .collect();

        let key = SlotKey {
            schedule_id: 1,
            division: 1,
            split: Split::Gold,
        };
        (ResultIndex::from_rows(&rows), key)
    }

    #[test]
    fn test_correct_prediction_scores_finish_position() {
        let (index, key) = three_finisher_slot();
        for pos in 1..=3 {
            assert_eq!(
                score_slot(index.get(&key), Some(100 + pos)),
                SlotScore::Scored(pos)
            );
        }
    }

    #[test]
    fn test_no_show_pick_and_no_pick_share_the_penalty() {
        let (index, key) = three_finisher_slot();

        let no_show = score_slot(index.get(&key), Some(999));
        let abstained = score_slot(index.get(&key), None);

        assert_eq!(no_show.points(), Some(4));
        assert_eq!(abstained.points(), Some(4));
        assert_eq!(
            no_show,
            SlotScore::Penalized {
                points: 4,
                predicted: true
            }
        );
        assert_eq!(
            abstained,
            SlotScore::Penalized {
                points: 4,
                predicted: false
            }
        );
    }

    #[test]
    fn test_uncontested_slot_yields_no_points() {
        let score = score_slot(None, Some(101));
        assert_eq!(score, SlotScore::Uncontested);
        assert_eq!(score.points(), None);
        assert!(!score.is_contested());
    }
}
