//! Integration tests: GET /health and the server scaffold

use acu_builder::server::Server;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderName, HeaderValue, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::set_header::SetResponseHeaderLayer;

fn build_app() -> Router {
    Server::new("127.0.0.1", 0)
        .initialize_routes()
        .with_default_middlewares()
        .into_router()
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn health_returns_fixed_status_payload() {
    let (status, body) = send(build_app(), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"system_1":"OK","system_2":"ERROR"}"#
    );
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let (status, body) = send(build_app(), "GET", "/status").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({ "error": { "code": "not_found", "message": "Resource not found" } })
    );
}

#[tokio::test]
async fn mounted_router_is_served_under_base_url() {
    let sub = Router::new().route("/ping", get(|| async { "pong" }));
    let app = Server::new("127.0.0.1", 0)
        .initialize_routes()
        .mount("/api", sub)
        .into_router();

    let (status, body) = send(app.clone(), "GET", "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"pong");

    let (status, _) = send(app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cors_headers_are_added() {
    let response = build_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn caller_supplied_layer_wraps_routes() {
    let app = Server::new("127.0.0.1", 0)
        .initialize_routes()
        .with_default_middlewares()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-acu-builder"),
            HeaderValue::from_static("health-scaffold"),
        ))
        .into_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-acu-builder").unwrap(),
        "health-scaffold"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"system_1":"OK","system_2":"ERROR"}"#);
}

#[tokio::test]
async fn caller_supplied_layer_also_covers_fallback() {
    let app = Server::new("127.0.0.1", 0)
        .initialize_routes()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-acu-builder"),
            HeaderValue::from_static("fallback"),
        ))
        .into_router();

    let response = app
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers().get("x-acu-builder").unwrap(), "fallback");
}
