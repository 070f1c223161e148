use crate::config::BrokerConfig;
use crate::error::{AppError, Backend};
use lapin::{Connection, ConnectionProperties};

/// AMQP reply code sent on clean channel/connection close.
pub const REPLY_SUCCESS: u16 = 200;

/// Opens a fresh connection for the current request.
///
/// # Errors
/// Returns `AppError::Unavailable` if the connection cannot be established.
pub async fn connect(config: &BrokerConfig) -> Result<Connection, AppError> {
    Connection::connect(&config.url(), ConnectionProperties::default())
        .await
        .map_err(|e| AppError::unavailable(Backend::Broker, e))
}

/// Best-effort close; the connection is request-scoped either way.
pub async fn close(conn: Connection) {
    if let Err(e) = conn.close(REPLY_SUCCESS, "").await {
        tracing::debug!(error = %e, "Failed to close broker connection");
    }
}
