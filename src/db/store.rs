use crate::db::models::LeaderboardEntry;
use crate::db::schema::Backend;
use crate::db::{DbPool, apply_ddl};
use crate::error::TaaltorenError;

/// Maximum number of rows served by the leaderboard.
pub const LEADERBOARD_LIMIT: i64 = 10;

/// Access to the `users` table. Every method runs a single statement on a
/// connection borrowed from the pool for that statement only.
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet.
    pub async fn init_schema(&self, backend: Backend) -> Result<(), TaaltorenError> {
        apply_ddl(&self.pool, backend.users_ddl()).await
    }

    /// Insert a user with the given credentials; `points` takes the column default.
    /// Does not check for an existing row with the same username.
    pub async fn register(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), TaaltorenError> {
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// True when some row matches both fields exactly.
    pub async fn verify_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<bool, TaaltorenError> {
        let row = sqlx::query("SELECT id FROM users WHERE username = ? AND password = ?")
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Top users by points, highest first; ties keep insertion order.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, TaaltorenError> {
        let rows = sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT username, points FROM users ORDER BY points DESC, id ASC LIMIT ?",
        )
        .bind(LEADERBOARD_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Add `points` (any sign) to every row named `username`.
    /// Returns the number of rows touched; zero is not an error.
    pub async fn add_points(
        &self,
        username: Option<&str>,
        points: i64,
    ) -> Result<u64, TaaltorenError> {
        let result = sqlx::query("UPDATE users SET points = points + ? WHERE username = ?")
            .bind(points)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
