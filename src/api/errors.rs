// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Route-facing error taxonomy and the uniform JSON envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape of every failure response. `details` is omitted for
/// validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Errors surfaced by the request handlers.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// `prompt` missing or blank.
    MissingPrompt,
    /// `text` missing or blank.
    MissingText,
    /// multipart `image` field missing.
    MissingFile,
    EnhanceFailed(String),
    AnalyzeFailed(String),
    ImageGenerationFailed(String),
    ImageAnalysisFailed(String),
    VariationFailed(String),
}

impl ApiError {
    /// Stable machine-readable code for the envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingPrompt => "no_prompt",
            ApiError::MissingText => "no_text",
            ApiError::MissingFile => "no_file",
            ApiError::EnhanceFailed(_) => "enhance_failed",
            ApiError::AnalyzeFailed(_) => "analyze_failed",
            ApiError::ImageGenerationFailed(_) => "image_generation_failed",
            ApiError::ImageAnalysisFailed(_) => "image_analysis_failed",
            ApiError::VariationFailed(_) => "variation_failed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPrompt | ApiError::MissingText | ApiError::MissingFile => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::MissingPrompt | ApiError::MissingText | ApiError::MissingFile => None,
            ApiError::EnhanceFailed(msg)
            | ApiError::AnalyzeFailed(msg)
            | ApiError::ImageGenerationFailed(msg)
            | ApiError::ImageAnalysisFailed(msg)
            | ApiError::VariationFailed(msg) => Some(msg.clone()),
        }
    }

    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.kind().to_string(),
            details: self.details(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details() {
            Some(details) => write!(f, "{}: {}", self.kind(), details),
            None => write!(f, "{}", self.kind()),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_envelope())).into_response()
    }
}
