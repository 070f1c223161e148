use crate::adapters::{database, rabbitmq, redis};
use crate::config::{BrokerConfig, CacheConfig, Config, DatabaseConfig};
use crate::error::Backend;
use crate::telemetry::METRIC_HEALTH_STATUS;
use metrics::gauge;
use std::time::Duration;
use tokio::time::error::Elapsed;
use tokio::time::timeout;

/// Probes the three backends independently; a failing backend never blocks
/// or fails the others.
#[derive(Clone, Debug)]
pub struct HealthService {
    database: DatabaseConfig,
    cache: CacheConfig,
    broker: BrokerConfig,
    probe_timeout: Duration,
}

impl HealthService {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            database: config.database.clone(),
            cache: config.cache.clone(),
            broker: config.broker.clone(),
            probe_timeout: Duration::from_millis(config.health.probe_timeout_ms),
        }
    }

    /// Checks database connectivity with a `SELECT 1` round-trip.
    ///
    /// # Errors
    /// Returns a string describing the failure if the database is unreachable.
    pub async fn check_database(&self) -> Result<(), String> {
        let probe = async {
            let mut conn = database::connect(&self.database).await.map_err(|e| e.to_string())?;
            sqlx::query("SELECT 1")
                .execute(&mut conn)
                .await
                .map_err(|e| format!("Database probe query failed: {e}"))?;
            database::close(conn).await;
            Ok(())
        };

        finish(Backend::Database, timeout(self.probe_timeout, probe).await)
    }

    /// Checks cache connectivity with a `PING`.
    ///
    /// # Errors
    /// Returns a string describing the failure if Redis is unreachable.
    pub async fn check_cache(&self) -> Result<(), String> {
        let probe = async {
            let mut conn = redis::connect(&self.cache).await.map_err(|e| e.to_string())?;
            redis::ping(&mut conn).await.map_err(|e| format!("Redis ping failed: {e}"))
        };

        finish(Backend::Cache, timeout(self.probe_timeout, probe).await)
    }

    /// Checks broker connectivity with an open/close round-trip.
    ///
    /// # Errors
    /// Returns a string describing the failure if RabbitMQ is unreachable.
    pub async fn check_broker(&self) -> Result<(), String> {
        let probe = async {
            let conn = rabbitmq::connect(&self.broker).await.map_err(|e| e.to_string())?;
            rabbitmq::close(conn).await;
            Ok(())
        };

        finish(Backend::Broker, timeout(self.probe_timeout, probe).await)
    }
}

fn finish(backend: Backend, outcome: Result<Result<(), String>, Elapsed>) -> Result<(), String> {
    let result = outcome.unwrap_or_else(|_| Err(format!("{backend} probe timed out")));
    let status = if result.is_ok() { 1.0 } else { 0.0 };
    gauge!(METRIC_HEALTH_STATUS, "component" => backend.key()).set(status);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn unreachable_service() -> HealthService {
        let config = Config::try_parse_from([
            "homelab-api",
            "--postgres-host",
            "127.0.0.1",
            "--postgres-port",
            "9",
            "--redis-host",
            "127.0.0.1",
            "--redis-port",
            "9",
            "--rabbitmq-host",
            "127.0.0.1",
            "--rabbitmq-port",
            "9",
            "--probe-timeout-ms",
            "1500",
        ])
        .expect("test config should parse");
        HealthService::new(&config)
    }

    #[tokio::test]
    async fn probes_fail_independently_when_backends_are_down() {
        let service = unreachable_service();

        let (db, cache, broker) =
            tokio::join!(service.check_database(), service.check_cache(), service.check_broker());

        assert!(db.is_err());
        assert!(cache.is_err());
        assert!(broker.is_err());
    }
}
