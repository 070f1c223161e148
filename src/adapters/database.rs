use crate::config::DatabaseConfig;
use crate::error::{AppError, Backend};
use serde::Serialize;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use time::OffsetDateTime;

/// Row shape of the `users` table surfaced by the listing endpoint.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// Opens a fresh connection for the current request.
///
/// # Errors
/// Returns `AppError::Unavailable` if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, AppError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);

    PgConnection::connect_with(&options).await.map_err(|e| AppError::unavailable(Backend::Database, e))
}

/// Best-effort close; the connection is request-scoped either way.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "Failed to close database connection");
    }
}
