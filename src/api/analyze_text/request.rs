// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text analysis request type and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request for text analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Text to analyze.
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeTextRequest {
    /// Reject absent or blank text before any upstream call is made.
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ApiError::MissingText),
        }
    }
}
