use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_member_history;

pub fn routes() -> Router<Database> {
    Router::new().route("/:slug/members/:user_id/history", get(get_member_history))
}
