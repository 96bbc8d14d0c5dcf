use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One inventory transaction, inbound ("entrada") or outbound ("saida").
///
/// `date` is the movement date as a `YYYY-MM-DD` string, compared
/// lexicographically for range filtering. `recorded_at` is the server-side
/// write timestamp and is overwritten on every update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movement {
    pub id: i64,
    pub kind: String,
    pub date: String,
    pub product: String,
    pub quantity: f64,
    pub destination: Option<String>,
    pub recorded_at: String,
}
