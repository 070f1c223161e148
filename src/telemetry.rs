use crate::config::{LogFormat, TelemetryConfig};
use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

/// Total HTTP requests counter, labeled by method and endpoint.
pub const METRIC_HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
/// HTTP request duration histogram.
pub const METRIC_HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
/// Per-backend health probe status gauge.
pub const METRIC_HEALTH_STATUS: &str = "homelab_health_status";

/// Initializes the tracing subscriber and installs the process-wide
/// Prometheus recorder. The returned handle renders the text exposition
/// for the `/metrics` endpoint.
///
/// # Errors
/// Returns an error if a log filter directive is invalid or a recorder is
/// already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<PrometheusHandle> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into())
        .add_directive("sqlx=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("lapin=warn".parse()?);

    match config.log_format {
        LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        }
    }

    let handle = install_recorder()?;
    Ok(handle)
}

/// Installs the Prometheus recorder and registers metric descriptions.
///
/// # Errors
/// Returns an error if a global recorder is already installed.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(METRIC_HTTP_REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(METRIC_HTTP_REQUEST_DURATION_SECONDS, "HTTP request duration");
    describe_gauge!(METRIC_HEALTH_STATUS, "Status of backend health probes (1 for ok, 0 for error)");

    Ok(handle)
}
