use sqlx::SqlitePool;
use storage::{
    dto::movement::NewMovement, error::Result, models::Movement,
    repository::movement::MovementRepository,
};

/// List movements inside the inclusive date range, newest write first
pub async fn list_movements(
    pool: &SqlitePool,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Vec<Movement>> {
    let repo = MovementRepository::new(pool);
    repo.list(start_date, end_date).await
}

/// Record a new movement
pub async fn create_movement(pool: &SqlitePool, new: &NewMovement) -> Result<Movement> {
    let repo = MovementRepository::new(pool);
    repo.create(new).await
}

/// Overwrite an existing movement
pub async fn update_movement(pool: &SqlitePool, id: i64, new: &NewMovement) -> Result<()> {
    let repo = MovementRepository::new(pool);
    repo.update(id, new).await
}

/// Permanently remove a movement
pub async fn delete_movement(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = MovementRepository::new(pool);
    repo.delete(id).await
}
