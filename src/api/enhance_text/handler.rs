// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::EnhanceTextRequest;
use super::response::EnhanceTextResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::providers::normalize;

/// POST /api/enhance-text - Rewrite a text prompt for image generation
///
/// Pipeline:
/// 1. Validate request (400 before any upstream call)
/// 2. Call the text-generation provider
/// 3. Normalize the response shape and trim
pub async fn enhance_text_handler(
    State(state): State<AppState>,
    Json(request): Json<EnhanceTextRequest>,
) -> Result<Json<EnhanceTextResponse>, ApiError> {
    let prompt = request.validate().map_err(|e| {
        warn!("enhance-text validation failed: {}", e);
        e
    })?;

    debug!("enhance-text request: prompt_len={}", prompt.len());

    let raw = state.textgen.enhance(prompt).await.map_err(|e| {
        warn!("enhance-text upstream failure: {}", e);
        ApiError::EnhanceFailed(e.to_string())
    })?;

    let enhanced = normalize::generated_text_or_raw(&raw).trim().to_string();

    // A degenerate upstream response must never blank the prompt out.
    let enhanced = if enhanced.is_empty() {
        prompt.to_string()
    } else {
        enhanced
    };

    Ok(Json(EnhanceTextResponse { enhanced }))
}
