// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement request type and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request for prompt enhancement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceTextRequest {
    /// Prompt to rewrite for image generation.
    #[serde(default)]
    pub prompt: Option<String>,
}

impl EnhanceTextRequest {
    /// Reject an absent or blank prompt before any upstream call is made.
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
            _ => Err(ApiError::MissingPrompt),
        }
    }
}
