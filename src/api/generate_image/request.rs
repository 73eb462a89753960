// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request type and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request for image generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    /// Prompt describing the image to generate.
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateImageRequest {
    /// Reject an absent or blank prompt before any upstream call is made.
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
            _ => Err(ApiError::MissingPrompt),
        }
    }
}
