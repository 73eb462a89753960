// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::GenerateImageRequest;
use super::response::GenerateImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/generate-image - Generate one image from a text prompt
///
/// Pipeline:
/// 1. Validate request (400 before any upstream call)
/// 2. Delegate to the configured generation strategy
pub async fn generate_image_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let prompt = request.validate().map_err(|e| {
        warn!("generate-image validation failed: {}", e);
        e
    })?;

    debug!("generate-image request: prompt_len={}", prompt.len());

    let image = state.generator.generate(prompt).await.map_err(|e| {
        warn!("generate-image upstream failure: {}", e);
        ApiError::ImageGenerationFailed(e.to_string())
    })?;

    Ok(Json(GenerateImageResponse {
        image: image.into_string(),
    }))
}
