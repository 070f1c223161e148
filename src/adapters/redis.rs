use crate::config::CacheConfig;
use crate::error::{AppError, Backend};
use redis::aio::MultiplexedConnection;

/// Opens a fresh connection for the current request and verifies liveness
/// with a `PING`.
///
/// # Errors
/// Returns `AppError::Unavailable` if the connection or the ping fails.
pub async fn connect(config: &CacheConfig) -> Result<MultiplexedConnection, AppError> {
    let client = redis::Client::open(config.url()).map_err(|e| AppError::unavailable(Backend::Cache, e))?;
    let mut conn = client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::unavailable(Backend::Cache, e))?;
    ping(&mut conn).await.map_err(|e| AppError::unavailable(Backend::Cache, e))?;
    Ok(conn)
}

/// Sends a `PING` on an open connection.
///
/// # Errors
/// Returns the underlying error if the server does not answer.
pub async fn ping(conn: &mut MultiplexedConnection) -> Result<(), redis::RedisError> {
    let _: String = redis::cmd("PING").query_async(conn).await?;
    Ok(())
}
