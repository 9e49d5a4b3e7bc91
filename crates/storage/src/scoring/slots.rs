use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Schedule;

/// Divisions every member is obligated to predict, per race week.
pub const DIVISIONS: RangeInclusive<i16> = 1..=6;

/// Sub-field grouping within a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Gold,
    Silver,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Gold, Split::Silver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gold" => Some(Self::Gold),
            "silver" => Some(Self::Silver),
            _ => None,
        }
    }
}

/// Identity of one predictable combination within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub schedule_id: i32,
    pub division: i16,
    pub split: Split,
}

/// A slot together with the week it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub key: SlotKey,
    pub week: i32,
}

/// Enumerates every slot a member was obligated to predict for the given
/// schedules: the full schedules x divisions x splits product, independent of
/// whether anyone predicted it or any result exists for it.
pub fn build_universe(schedules: &[Schedule]) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(schedules.len() * DIVISIONS.count() * Split::ALL.len());

    for schedule in schedules {
        for division in DIVISIONS {
            for split in Split::ALL {
                slots.push(Slot {
                    key: SlotKey {
                        schedule_id: schedule.schedule_id,
                        division,
                        split,
                    },
                    week: schedule.week,
                });
            }
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(schedule_id: i32, week: i32) -> Schedule {
        Schedule {
            schedule_id,
            season_id: 1,
            week,
            track: format!("Track {week}"),
            race_date: None,
        }
    }

    #[test]
    fn test_universe_is_full_product() {
        let slots = build_universe(&[schedule(10, 1), schedule(11, 2)]);
        assert_eq!(slots.len(), 2 * 6 * 2);
    }

    #[test]
    fn test_universe_carries_weeks() {
        let slots = build_universe(&[schedule(10, 1), schedule(11, 2)]);
        assert!(slots.iter().filter(|s| s.week == 2).count() == 12);
        assert!(slots.iter().all(|s| s.week == 1 || s.week == 2));
    }

    #[test]
    fn test_empty_schedules_yield_empty_universe() {
        assert!(build_universe(&[]).is_empty());
    }

    #[test]
    fn test_split_round_trip() {
        for split in Split::ALL {
            assert_eq!(Split::parse(split.as_str()), Some(split));
        }
        assert_eq!(Split::parse("bronze"), None);
    }
}
