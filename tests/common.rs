#![allow(dead_code, unreachable_pub, clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::Response;
use clap::Parser;
use homelab_api::api;
use homelab_api::config::Config;
use homelab_api::telemetry;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::{Once, OnceLock};

static TRACING: Once = Once::new();
static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

pub fn setup_tracing() {
    TRACING.call_once(|| {
        let filter =
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Config pointing every backend at a closed local port, so connection
/// attempts fail fast without any live backend.
pub fn unreachable_config() -> Config {
    Config::try_parse_from([
        "homelab-api",
        "--host",
        "127.0.0.1",
        "--port",
        "0",
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
    .expect("test config should parse")
}

pub fn metrics_handle() -> PrometheusHandle {
    RECORDER.get_or_init(|| telemetry::install_recorder().expect("recorder should install")).clone()
}

pub fn test_app() -> Router {
    setup_tracing();
    api::app_router(unreachable_config(), metrics_handle())
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
