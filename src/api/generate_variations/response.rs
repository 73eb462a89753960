// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Variation generation response type

use serde::{Deserialize, Serialize};

/// Response from variation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateVariationsResponse {
    /// Caption extracted from the uploaded image.
    pub caption: String,
    /// Exactly three image references, in style order.
    pub variations: Vec<String>,
}
