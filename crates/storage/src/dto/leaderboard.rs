use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::scoring::{RankMovement, RankedWithMovement};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    #[serde(flatten)]
    pub pagination: super::common::PaginationParams,
}

impl LeaderboardQuery {
    pub fn validate(&self) -> Result<(), String> {
        self.pagination.validate()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub member: MemberInfo,
    pub total_points: i32,
    pub weeks_participated: i32,
    pub average_points: f64,
    pub position_change: PositionChange,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MemberInfo {
    pub user_id: Uuid,
    pub display_name: String,
}

/// Movement relative to the leaderboard as it stood before the most recently
/// contested week. Positive change means the member climbed.
#[derive(Debug, Serialize, ToSchema)]
pub struct PositionChange {
    pub change: i64,
    pub is_new: bool,
}

impl From<RankMovement> for PositionChange {
    fn from(movement: RankMovement) -> Self {
        Self {
            change: movement.change,
            is_new: movement.is_new,
        }
    }
}

impl LeaderboardEntry {
    pub fn from_ranked(entry: RankedWithMovement, display_name: String) -> Self {
        Self {
            rank: entry.totals.rank,
            member: MemberInfo {
                user_id: entry.totals.user_id,
                display_name,
            },
            total_points: entry.totals.total_points,
            weeks_participated: entry.totals.weeks_participated,
            average_points: entry.totals.average_points,
            position_change: entry.movement.into(),
        }
    }
}
