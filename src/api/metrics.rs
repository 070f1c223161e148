use crate::api::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

/// Prometheus text exposition content type.
const CONTENT_TYPE_LATEST: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Renders the process-wide metrics registry for scraping.
pub async fn render(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, CONTENT_TYPE_LATEST)], state.metrics.render())
}
