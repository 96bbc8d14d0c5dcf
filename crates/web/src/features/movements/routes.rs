use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_movement, delete_movement, list_movements, update_movement};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_movements))
        .route("/", post(create_movement))
        .route("/:id", put(update_movement))
        .route("/:id", delete(delete_movement))
}
