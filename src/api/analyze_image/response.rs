// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image analysis response type

use serde::{Deserialize, Serialize};

/// Response from image analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeImageResponse {
    /// Short natural-language description of the uploaded image.
    pub caption: String,
}
