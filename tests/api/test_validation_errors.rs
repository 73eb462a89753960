// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Input validation tests
//!
//! Every route invoked without its required input must answer 400 with the
//! documented stable code, omit `details`, and perform zero upstream calls.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt;

use prism_media_node::{
    api::http_server::{create_app, AppState},
    config::{GatewayConfig, ImageBackend},
};

const BOUNDARY: &str = "prism-test-boundary";

/// Stub provider that counts every request it sees and answers something
/// syntactically valid; validation failures must never reach it.
async fn spawn_counting_stub(calls: Arc<AtomicUsize>) -> String {
    let handler = move || {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            axum::Json(serde_json::json!([{"generated_text": "should never happen"}]))
                .into_response()
        }
    };
    let router = Router::new()
        .route("/textgen", post(handler.clone()))
        .route("/relay/chat/completions", post(handler.clone()))
        .route("/caption", post(handler.clone()))
        .route("/diffusion", post(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn gateway_config(base: &str) -> GatewayConfig {
    GatewayConfig {
        port: 0,
        relay_api_key: None,
        textgen_endpoint: format!("{base}/textgen"),
        chat_endpoint: format!("{base}/relay"),
        chat_model: "test-model".to_string(),
        caption_endpoint: format!("{base}/caption"),
        image_backend: ImageBackend::Diffusion {
            endpoint: format!("{base}/diffusion"),
        },
    }
}

async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_enhance_text_without_prompt() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = post_json(app, "/api/enhance-text", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no_prompt");
    assert!(json.get("details").is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no upstream call expected");
}

#[tokio::test]
async fn test_enhance_text_blank_prompt() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = post_json(app, "/api/enhance-text", r#"{"prompt": "   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no_prompt");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyze_text_without_text() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = post_json(app, "/api/analyze-text", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no_text");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_image_without_prompt() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = post_json(app, "/api/generate-image", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no_prompt");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyze_image_without_multipart_body() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = post_json(app, "/api/analyze-image", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no_file");
    assert!(json.get("details").is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_variations_without_image_field() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    // A well-formed multipart body whose only field is not named `image`.
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"attachment\"\r\n\r\nnot an image\r\n--{BOUNDARY}--\r\n"
    );

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/generate-variations")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "no_file");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_counting_stub(calls.clone()).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    // 21 MB of payload, above the 20 MB multipart cap.
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"big.png\"\r\nContent-Type: image/png\r\n\r\n"
    )
    .into_bytes();
    body.extend(std::iter::repeat(0u8).take(21 * 1024 * 1024));
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze-image")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.status().is_client_error() || response.status().is_server_error(),
        "oversized upload must be rejected, got {}",
        response.status()
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
