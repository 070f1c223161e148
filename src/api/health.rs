use crate::api::AppState;
use crate::api::schemas::health::{HealthResponse, ServiceStates};
use crate::error::Backend;
use crate::services::utc_timestamp;
use axum::{Json, extract::State};

const CONNECTED: &str = "connected";
const DISCONNECTED: &str = "disconnected";

/// Aggregated health check. Probes run concurrently and report
/// independently; the endpoint itself always returns 200 with status
/// `healthy` (liveness, not readiness).
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (database, cache, broker) = tokio::join!(
        state.health_service.check_database(),
        state.health_service.check_cache(),
        state.health_service.check_broker()
    );

    let services = ServiceStates {
        postgresql: connectivity(Backend::Database, database),
        redis: connectivity(Backend::Cache, cache),
        rabbitmq: connectivity(Backend::Broker, broker),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
        timestamp: utc_timestamp(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}

fn connectivity(backend: Backend, probe: Result<(), String>) -> String {
    match probe {
        Ok(()) => CONNECTED.to_string(),
        Err(e) => {
            tracing::warn!(component = backend.key(), error = %e, "Health probe failed");
            DISCONNECTED.to_string()
        }
    }
}
