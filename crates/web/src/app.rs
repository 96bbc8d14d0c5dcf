use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};

use crate::features;

/// Build the application router over the given database handle. The CORS
/// layer allows any origin; the API is consumed by a static frontend served
/// from elsewhere.
pub fn router(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/movements", features::movements::routes())
        .layer(cors)
        .with_state(db)
}
