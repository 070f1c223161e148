use crate::api::schemas::info::ApiInfo;
use crate::config::Config;
use crate::services::cache_service::CacheService;
use crate::services::health_service::HealthService;
use crate::services::message_service::MessageService;
use crate::services::user_service::UserService;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{
    Json, Router,
    middleware::from_fn,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fmt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod cache;
pub mod health;
pub mod messages;
pub mod metrics;
pub mod middleware;
pub mod schemas;
pub mod users;

const API_TITLE: &str = "Kubernetes Homelab API";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub health_service: HealthService,
    pub message_service: MessageService,
    pub cache_service: CacheService,
    pub user_service: UserService,
    pub metrics: PrometheusHandle,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Configures and returns the application router.
pub fn app_router(config: Config, metrics_handle: PrometheusHandle) -> Router {
    let state = AppState {
        health_service: HealthService::new(&config),
        message_service: MessageService::new(config.broker.clone()),
        cache_service: CacheService::new(config.cache.clone()),
        user_service: UserService::new(config.database.clone()),
        config,
        metrics: metrics_handle,
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health))
        .route("/metrics", get(metrics::render))
        .route("/messages", post(messages::send_message))
        .route("/cache/{key}", get(cache::get_value).post(cache::set_value))
        .route("/database/users", get(users::list_users))
        .layer(from_fn(middleware::track_metrics))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                ),
        )
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuidOrHeader,
        ))
        .with_state(state)
}

/// Root endpoint: service name and version.
async fn root() -> Json<ApiInfo> {
    Json(ApiInfo { message: API_TITLE.to_string(), version: env!("CARGO_PKG_VERSION").to_string() })
}
