use std::collections::HashMap;

use crate::models::RaceResult;
use crate::scoring::slots::{SlotKey, Split};

/// Recorded finishes for one slot.
#[derive(Debug, Default)]
pub struct SlotResults {
    positions: HashMap<i32, i32>,
}

impl SlotResults {
    /// Number of distinct drivers with a recorded finish in this slot.
    /// Sizes the penalty for absent or no-show picks.
    pub fn participant_count(&self) -> i32 {
        self.positions.len() as i32
    }

    pub fn position_of(&self, driver_id: i32) -> Option<i32> {
        self.positions.get(&driver_id).copied()
    }
}

/// Index of known race results keyed by slot. A slot absent from the index
/// is uncontested: no result row has been recorded for it yet.
#[derive(Debug, Default)]
pub struct ResultIndex {
    slots: HashMap<SlotKey, SlotResults>,
}

impl ResultIndex {
    pub fn from_rows(rows: &[RaceResult]) -> Self {
        let mut slots: HashMap<SlotKey, SlotResults> = HashMap::new();

        for row in rows {
            let Some(split) = Split::parse(&row.split) else {
                tracing::warn!(
                    result_id = row.result_id,
                    split = %row.split,
                    "skipping result with unknown split"
                );
                continue;
            };

            let key = SlotKey {
                schedule_id: row.schedule_id,
                division: row.division,
                split,
            };

            slots
                .entry(key)
                .or_default()
                .positions
                .insert(row.driver_id, row.split_position);
        }

        Self { slots }
    }

    pub fn get(&self, key: &SlotKey) -> Option<&SlotResults> {
        self.slots.get(key)
    }

    pub fn is_contested(&self, key: &SlotKey) -> bool {
        self.slots
            .get(key)
            .is_some_and(|r| r.participant_count() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(schedule_id: i32, division: i16, split: &str, driver_id: i32, pos: i32) -> RaceResult {
        RaceResult {
            result_id: driver_id * 100 + pos,
            schedule_id,
            division,
            split: split.to_string(),
            driver_id,
            split_position: pos,
        }
    }

    #[test]
    fn test_participant_count_matches_rows() {
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 7, 1),
            result(1, 1, "gold", 8, 2),
            result(1, 1, "gold", 9, 3),
        ]);

        let key = SlotKey {
            schedule_id: 1,
            division: 1,
            split: Split::Gold,
        };
        assert_eq!(index.get(&key).unwrap().participant_count(), 3);
        assert_eq!(index.get(&key).unwrap().position_of(8), Some(2));
        assert_eq!(index.get(&key).unwrap().position_of(99), None);
    }

    #[test]
    fn test_slots_are_keyed_independently() {
        let index = ResultIndex::from_rows(&[
            result(1, 1, "gold", 7, 1),
            result(1, 1, "silver", 7, 1),
            result(1, 2, "gold", 7, 1),
        ]);

        for (division, split) in [(1, Split::Gold), (1, Split::Silver), (2, Split::Gold)] {
            let key = SlotKey {
                schedule_id: 1,
                division,
                split,
            };
            assert_eq!(index.get(&key).unwrap().participant_count(), 1);
        }
    }

    #[test]
    fn test_missing_slot_is_uncontested() {
        let index = ResultIndex::from_rows(&[result(1, 1, "gold", 7, 1)]);
        let key = SlotKey {
            schedule_id: 2,
            division: 1,
            split: Split::Gold,
        };
        assert!(index.get(&key).is_none());
        assert!(!index.is_contested(&key));
    }

    #[test]
    fn test_unknown_split_rows_are_dropped() {
        let index = ResultIndex::from_rows(&[result(1, 1, "bronze", 7, 1)]);
        let key = SlotKey {
            schedule_id: 1,
            division: 1,
            split: Split::Gold,
        };
        assert!(index.get(&key).is_none());
    }
}
