use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_season_leaderboard;

pub fn routes() -> Router<Database> {
    Router::new().route("/:slug/leaderboard", get(get_season_leaderboard))
}
