use crate::telemetry::{METRIC_HTTP_REQUEST_DURATION_SECONDS, METRIC_HTTP_REQUESTS_TOTAL};
use axum::extract::{MatchedPath, Request};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use std::time::Instant;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Records the request counter and latency histogram for every request.
/// The endpoint label is the matched route template, not the raw path.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path().to_owned(), |path| path.as_str().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;

    counter!(METRIC_HTTP_REQUESTS_TOTAL, "method" => method, "endpoint" => endpoint).increment(1);
    histogram!(METRIC_HTTP_REQUEST_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

    response
}

/// Uses the caller-provided `x-request-id` when present, otherwise a fresh
/// UUID.
#[derive(Clone, Copy, Debug)]
pub struct MakeRequestUuidOrHeader;

impl MakeRequestId for MakeRequestUuidOrHeader {
    fn make_request_id<B>(&mut self, request: &axum::http::Request<B>) -> Option<RequestId> {
        if let Some(id) = request.headers().get("x-request-id") {
            return Some(RequestId::new(id.clone()));
        }
        let id = HeaderValue::from_str(Uuid::new_v4().to_string().as_str()).ok()?;
        Some(RequestId::new(id))
    }
}
