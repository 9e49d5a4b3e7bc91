use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{list_member_predictions, submit_prediction};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", put(submit_prediction))
        .route("/:user_id", get(list_member_predictions))
}
