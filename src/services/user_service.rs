use crate::adapters::database::{self, UserRecord};
use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};

/// Fixed row limit for the listing endpoint.
pub const RECENT_USERS_LIMIT: i64 = 10;

/// Read-only view over the `users` table.
#[derive(Clone, Debug)]
pub struct UserService {
    database: DatabaseConfig,
}

impl UserService {
    #[must_use]
    pub const fn new(database: DatabaseConfig) -> Self {
        Self { database }
    }

    /// Returns the most recently created users, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Unavailable` if the database cannot be reached and
    /// `AppError::OperationFailed` if the query fails.
    pub async fn list_recent(&self) -> Result<Vec<UserRecord>> {
        let mut conn = database::connect(&self.database).await?;
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, email, created_at FROM users ORDER BY created_at DESC LIMIT $1",
        )
        .bind(RECENT_USERS_LIMIT)
        .fetch_all(&mut conn)
        .await
        .map_err(|e| AppError::operation("Failed to get users", e))?;
        database::close(conn).await;
        Ok(users)
    }
}
