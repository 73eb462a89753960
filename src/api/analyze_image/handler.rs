// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image analysis endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use tracing::{debug, warn};

use super::response::AnalyzeImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::upload;
use crate::providers::normalize;

/// Caption substituted when the extracted caption is blank.
const EMPTY_CAPTION_FALLBACK: &str = "Could not analyze image.";

/// POST /api/analyze-image - Caption an uploaded image
///
/// Pipeline:
/// 1. Extract the multipart `image` field (400 `no_file` when absent)
/// 2. Call the captioning provider
/// 3. Normalize the response shape; blank captions map to the fallback
pub async fn analyze_image_handler(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<AnalyzeImageResponse>, ApiError> {
    let Some(mut multipart) = multipart else {
        warn!("analyze-image request without multipart body");
        return Err(ApiError::MissingFile);
    };

    let upload = upload::read_image_field(&mut multipart)
        .await
        .map_err(|e| {
            warn!("analyze-image multipart decode failed: {}", e);
            ApiError::ImageAnalysisFailed(e.to_string())
        })?
        .ok_or(ApiError::MissingFile)?;

    debug!(
        "analyze-image request: {} bytes, content_type={:?}",
        upload.data.len(),
        upload.content_type
    );

    let raw = state
        .captioner
        .caption(&upload.data, upload.content_type.as_deref())
        .await
        .map_err(|e| {
            warn!("analyze-image upstream failure: {}", e);
            ApiError::ImageAnalysisFailed(e.to_string())
        })?;

    let caption = normalize::generated_text_or_raw(&raw);
    let caption = if caption.trim().is_empty() {
        EMPTY_CAPTION_FALLBACK.to_string()
    } else {
        caption
    };

    Ok(Json(AnalyzeImageResponse { caption }))
}
