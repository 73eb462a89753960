// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text analysis endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::AnalyzeTextRequest;
use super::response::AnalyzeTextResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/analyze-text - Analyze text via the chat relay
pub async fn analyze_text_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, ApiError> {
    let text = request.validate().map_err(|e| {
        warn!("analyze-text validation failed: {}", e);
        e
    })?;

    debug!("analyze-text request: text_len={}", text.len());

    let analysis = state.chat.analyze(text).await.map_err(|e| {
        warn!("analyze-text upstream failure: {}", e);
        ApiError::AnalyzeFailed(e.to_string())
    })?;

    Ok(Json(AnalyzeTextResponse { analysis }))
}
