// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response type

use serde::{Deserialize, Serialize};

/// Response from image generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    /// Inline `data:image/png;base64,...` URI or a fetch-on-demand URL.
    pub image: String,
}
