#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn health_returns_200_with_all_backends_disconnected() {
    let app = common::test_app();

    let response =
        app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "API is running");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["services"]["postgresql"], "disconnected");
    assert_eq!(body["services"]["redis"], "disconnected");
    assert_eq!(body["services"]["rabbitmq"], "disconnected");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn root_reports_name_and_version() {
    let app = common::test_app();

    let response =
        app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Kubernetes Homelab API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = common::test_app();

    let response =
        app.oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
