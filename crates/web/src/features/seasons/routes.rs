use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_season, list_seasons};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_seasons))
        .route("/:slug", get(get_season))
}
