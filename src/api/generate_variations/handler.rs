// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Variation generation endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use tracing::{debug, warn};

use super::response::GenerateVariationsResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::upload;
use crate::providers::ImageRef;

/// POST /api/generate-variations - Caption an upload, generate 3 styled variants
///
/// Pipeline:
/// 1. Extract the multipart `image` field (400 `no_file` when absent)
/// 2. Delegate to the variation pipeline; any step failure discards all
///    partial work and surfaces one envelope
pub async fn generate_variations_handler(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<GenerateVariationsResponse>, ApiError> {
    let Some(mut multipart) = multipart else {
        warn!("generate-variations request without multipart body");
        return Err(ApiError::MissingFile);
    };

    let upload = upload::read_image_field(&mut multipart)
        .await
        .map_err(|e| {
            warn!("generate-variations multipart decode failed: {}", e);
            ApiError::VariationFailed(e.to_string())
        })?
        .ok_or(ApiError::MissingFile)?;

    debug!(
        "generate-variations request: {} bytes, content_type={:?}",
        upload.data.len(),
        upload.content_type
    );

    let set = state
        .variations
        .generate(&upload.data, upload.content_type.as_deref())
        .await
        .map_err(|e| {
            warn!("generate-variations pipeline failure: {}", e);
            ApiError::VariationFailed(e.to_string())
        })?;

    Ok(Json(GenerateVariationsResponse {
        caption: set.caption,
        variations: set.images.into_iter().map(ImageRef::into_string).collect(),
    }))
}
