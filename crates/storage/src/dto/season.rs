use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Schedule, Season};

/// Response containing basic season information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonResponse {
    pub season_id: i32,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub prediction_deadline: DateTime<Utc>,
    pub week_one_deadline: DateTime<Utc>,
}

/// Season with its race weeks, the data a prediction form is built from
#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonDetailResponse {
    pub season_id: i32,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub prediction_deadline: DateTime<Utc>,
    pub week_one_deadline: DateTime<Utc>,
    pub schedules: Vec<ScheduleInfo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleInfo {
    pub schedule_id: i32,
    pub week: i32,
    pub track: String,
    pub race_date: Option<chrono::NaiveDate>,
}

impl From<Season> for SeasonResponse {
    fn from(season: Season) -> Self {
        Self {
            season_id: season.season_id,
            name: season.name,
            slug: season.slug,
            status: season.status,
            prediction_deadline: season.prediction_deadline,
            week_one_deadline: season.week_one_deadline,
        }
    }
}

impl SeasonDetailResponse {
    pub fn from_parts(season: Season, schedules: Vec<Schedule>) -> Self {
        Self {
            season_id: season.season_id,
            name: season.name,
            slug: season.slug,
            status: season.status,
            prediction_deadline: season.prediction_deadline,
            week_one_deadline: season.week_one_deadline,
            schedules: schedules
                .into_iter()
                .map(|schedule| ScheduleInfo {
                    schedule_id: schedule.schedule_id,
                    week: schedule.week,
                    track: schedule.track,
                    race_date: schedule.race_date,
                })
                .collect(),
        }
    }
}
