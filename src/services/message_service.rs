use crate::adapters::rabbitmq;
use crate::config::BrokerConfig;
use crate::error::{AppError, Result};
use crate::services::utc_timestamp;
use lapin::options::{BasicPublishOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Connection};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// AMQP delivery mode marking a message as persistent.
const PERSISTENT_DELIVERY_MODE: u8 = 2;

const PUBLISH_CONTEXT: &str = "Failed to send message";

static LAST_ID_NANOS: AtomicU64 = AtomicU64::new(0);

/// Publishes JSON envelopes to per-priority queues over a request-scoped
/// broker connection.
#[derive(Clone, Debug)]
pub struct MessageService {
    broker: BrokerConfig,
}

/// Body enqueued on the destination queue.
#[derive(Debug, Serialize)]
struct QueueEnvelope<'a> {
    id: &'a str,
    message: &'a str,
    priority: &'a str,
    timestamp: &'a str,
}

#[derive(Clone, Debug)]
pub struct MessageReceipt {
    pub id: String,
    pub message: String,
    pub timestamp: String,
}

/// Destination queue for a priority label. Any label is accepted.
#[must_use]
pub fn queue_name(priority: &str) -> String {
    format!("messages_{priority}")
}

/// Derives a message id from the current timestamp, strictly above any id
/// issued earlier in this process.
fn next_message_id() -> String {
    let now = u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or(0);
    let issued = LAST_ID_NANOS
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(now.max(last + 1)))
        .map_or(now, |last| now.max(last + 1));
    format!("msg_{issued}")
}

impl MessageService {
    #[must_use]
    pub const fn new(broker: BrokerConfig) -> Self {
        Self { broker }
    }

    /// Publishes a message envelope to the queue for its priority.
    ///
    /// # Errors
    /// Returns `AppError::Unavailable` if the broker cannot be reached and
    /// `AppError::OperationFailed` if the declare or publish fails.
    pub async fn publish(&self, message: &str, priority: &str) -> Result<MessageReceipt> {
        let conn = rabbitmq::connect(&self.broker).await?;
        let result = publish_envelope(&conn, message, priority).await;
        rabbitmq::close(conn).await;
        result
    }
}

async fn publish_envelope(conn: &Connection, message: &str, priority: &str) -> Result<MessageReceipt> {
    let channel = conn.create_channel().await.map_err(|e| AppError::operation(PUBLISH_CONTEXT, e))?;

    let queue = queue_name(priority);
    channel
        .queue_declare(
            &queue,
            QueueDeclareOptions { durable: true, ..QueueDeclareOptions::default() },
            FieldTable::default(),
        )
        .await
        .map_err(|e| AppError::operation(PUBLISH_CONTEXT, e))?;

    let id = next_message_id();
    let timestamp = utc_timestamp();
    let envelope = QueueEnvelope { id: &id, message, priority, timestamp: &timestamp };
    let payload = serde_json::to_vec(&envelope).map_err(|e| AppError::operation(PUBLISH_CONTEXT, e))?;

    channel
        .basic_publish(
            "",
            &queue,
            BasicPublishOptions::default(),
            &payload,
            BasicProperties::default().with_delivery_mode(PERSISTENT_DELIVERY_MODE),
        )
        .await
        .map_err(|e| AppError::operation(PUBLISH_CONTEXT, e))?
        .await
        .map_err(|e| AppError::operation(PUBLISH_CONTEXT, e))?;

    tracing::debug!(queue = %queue, id = %id, "Message published");

    if let Err(e) = channel.close(rabbitmq::REPLY_SUCCESS, "").await {
        tracing::debug!(error = %e, "Failed to close broker channel");
    }

    Ok(MessageReceipt { id, message: message.to_owned(), timestamp })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_name_follows_priority() {
        assert_eq!(queue_name("normal"), "messages_normal");
        assert_eq!(queue_name("high"), "messages_high");
        assert_eq!(queue_name("whatever"), "messages_whatever");
    }

    #[test]
    fn message_ids_are_unique_and_increasing() {
        let parse = |id: String| -> u64 {
            assert!(id.starts_with("msg_"));
            id["msg_".len()..].parse().expect("id suffix should be numeric")
        };

        let first = parse(next_message_id());
        let second = parse(next_message_id());
        assert!(second > first);
    }

    #[test]
    fn envelope_carries_all_fields() {
        let envelope = QueueEnvelope {
            id: "msg_1",
            message: "hi",
            priority: "high",
            timestamp: "2026-01-01T00:00:00Z",
        };
        let value = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert_eq!(value["id"], "msg_1");
        assert_eq!(value["message"], "hi");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00Z");
    }
}
