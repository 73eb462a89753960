// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text analysis response type

use serde::{Deserialize, Serialize};

/// Response from text analysis. `analysis` is the relay model's output,
/// nominally a JSON document with sentiment, tone, and intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTextResponse {
    pub analysis: String,
}
