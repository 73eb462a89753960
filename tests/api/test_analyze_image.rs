// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /api/analyze-image

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use prism_media_node::{
    api::http_server::{create_app, AppState},
    config::{GatewayConfig, ImageBackend},
};

const BOUNDARY: &str = "prism-test-boundary";

async fn spawn_stub(router: Router) -> String {
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

fn multipart_image_body(data: &[u8], content_type: &str) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"upload.jpg\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn analyze(app: Router, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
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
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_caption_from_array_wrapped_response() {
    let stub = Router::new().route(
        "/caption",
        post(|| async {
            Json(serde_json::json!([{"generated_text": "a cat sitting on a windowsill"}]))
        }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    // JPEG magic bytes stand in for a real photo.
    let (status, json) = analyze(app, multipart_image_body(&[0xFF, 0xD8, 0xFF], "image/jpeg")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caption"], "a cat sitting on a windowsill");
}

#[tokio::test]
async fn test_caption_from_object_wrapped_response() {
    let stub = Router::new().route(
        "/caption",
        post(|| async { Json(serde_json::json!({"generated_text": "a dog on a beach"})) }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = analyze(app, multipart_image_body(&[1, 2, 3], "image/png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caption"], "a dog on a beach");
}

#[tokio::test]
async fn test_empty_caption_maps_to_fallback_sentinel() {
    let stub = Router::new().route(
        "/caption",
        post(|| async { Json(serde_json::json!([{"generated_text": ""}])) }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = analyze(app, multipart_image_body(&[1, 2, 3], "image/png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caption"], "Could not analyze image.");
}

#[tokio::test]
async fn test_whitespace_caption_maps_to_fallback_sentinel() {
    let stub = Router::new().route(
        "/caption",
        post(|| async { Json(serde_json::json!([{"generated_text": " \n\t "}])) }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = analyze(app, multipart_image_body(&[1, 2, 3], "image/png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caption"], "Could not analyze image.");
}

#[tokio::test]
async fn test_unknown_shape_falls_back_to_serialized_response() {
    let stub = Router::new().route(
        "/caption",
        post(|| async { Json(serde_json::json!({"estimated_time": 20.0})) }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = analyze(app, multipart_image_body(&[1, 2, 3], "image/png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caption"], r#"{"estimated_time":20.0}"#);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_image_analysis_failed() {
    let stub = Router::new().route(
        "/caption",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
    );
    let base = spawn_stub(stub).await;
    let app = create_app(AppState::new(&gateway_config(&base)).unwrap());

    let (status, json) = analyze(app, multipart_image_body(&[1, 2, 3], "image/png")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "image_analysis_failed");
    assert!(json["details"].as_str().unwrap().contains("503"));
}
