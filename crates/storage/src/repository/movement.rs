use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::movement::NewMovement;
use crate::error::{Result, StorageError};
use crate::models::Movement;

pub struct MovementRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MovementRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List movements whose `date` falls inside the inclusive range, newest
    /// write first. Both bounds are optional; comparison is on the raw
    /// `YYYY-MM-DD` strings.
    pub async fn list(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<Movement>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, kind, date, product, quantity, destination, recorded_at \
             FROM movements WHERE 1=1",
        );

        if let Some(start) = start_date {
            query.push(" AND date >= ").push_bind(start);
        }
        if let Some(end) = end_date {
            query.push(" AND date <= ").push_bind(end);
        }
        query.push(" ORDER BY recorded_at DESC");

        let movements = query
            .build_query_as::<Movement>()
            .fetch_all(self.pool)
            .await?;

        Ok(movements)
    }

    /// Insert a new movement, stamping `recorded_at` with the current local
    /// time. Returns the stored row with its assigned id.
    pub async fn create(&self, new: &NewMovement) -> Result<Movement> {
        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (kind, date, product, quantity, destination, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, kind, date, product, quantity, destination, recorded_at
            "#,
        )
        .bind(&new.kind)
        .bind(&new.date)
        .bind(&new.product)
        .bind(new.quantity)
        .bind(&new.destination)
        .bind(now_iso())
        .fetch_one(self.pool)
        .await?;

        Ok(movement)
    }

    /// Overwrite all mutable fields of the movement with the given id and
    /// reset its `recorded_at`. Fails with `NotFound` if no row matched.
    pub async fn update(&self, id: i64, new: &NewMovement) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE movements
            SET kind = ?, date = ?, product = ?, quantity = ?, destination = ?, recorded_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&new.kind)
        .bind(&new.date)
        .bind(&new.product)
        .bind(new.quantity)
        .bind(&new.destination)
        .bind(now_iso())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Permanently remove the movement with the given id. Fails with
    /// `NotFound` if no row matched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM movements WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Current local time in ISO-8601 form with microsecond precision. Stored
/// as TEXT; lexicographic order matches chronological order.
fn now_iso() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
