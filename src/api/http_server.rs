// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server assembly: shared state, router, and startup

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::analyze_image::analyze_image_handler;
use super::analyze_text::analyze_text_handler;
use super::enhance_text::enhance_text_handler;
use super::generate_image::generate_image_handler;
use super::generate_variations::generate_variations_handler;
use super::handlers::{HealthResponse, LIVENESS_MESSAGE};
use crate::config::{GatewayConfig, ImageBackend};
use crate::pipeline::VariationPipeline;
use crate::providers::{
    CaptionClient, ChatRelayClient, DiffusionImageGenerator, ImageGenerator, TextGenClient,
    UrlImageGenerator,
};
use crate::version;

/// JSON request bodies are capped at 10 MB.
const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Multipart uploads are capped at 20 MB.
const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

/// Shared per-request state. Everything here is an immutable product of the
/// startup configuration; no state survives a request or is mutated across
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub textgen: Arc<TextGenClient>,
    pub chat: Arc<ChatRelayClient>,
    pub captioner: Arc<CaptionClient>,
    pub generator: Arc<dyn ImageGenerator>,
    pub variations: Arc<VariationPipeline>,
}

impl AppState {
    /// Build all upstream clients from the startup configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let textgen = Arc::new(TextGenClient::new(&config.textgen_endpoint)?);
        let chat = Arc::new(ChatRelayClient::new(
            &config.chat_endpoint,
            &config.chat_model,
            config.relay_api_key.clone(),
        )?);
        let captioner = Arc::new(CaptionClient::new(&config.caption_endpoint)?);

        let generator: Arc<dyn ImageGenerator> = match &config.image_backend {
            ImageBackend::Diffusion { endpoint } => {
                Arc::new(DiffusionImageGenerator::new(endpoint)?)
            }
            ImageBackend::UrlTemplate { base } => Arc::new(UrlImageGenerator::new(base)?),
        };

        let variations = Arc::new(VariationPipeline::new(
            captioner.clone(),
            generator.clone(),
        ));

        Ok(Self {
            textgen,
            chat,
            captioner,
            generator,
            variations,
        })
    }
}

/// Assemble the gateway router.
pub fn create_app(state: AppState) -> Router {
    let json_routes = Router::new()
        .route("/api/enhance-text", post(enhance_text_handler))
        .route("/api/analyze-text", post(analyze_text_handler))
        .route("/api/generate-image", post(generate_image_handler))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT));

    let upload_routes = Router::new()
        .route("/api/analyze-image", post(analyze_image_handler))
        .route("/api/generate-variations", post(generate_variations_handler))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(json_routes)
        .merge(upload_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
    })
}

/// Bind and serve until the process exits.
pub async fn start_server(config: GatewayConfig) -> Result<()> {
    let state = AppState::new(&config)?;
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
