// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement response type

use serde::{Deserialize, Serialize};

/// Response from prompt enhancement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceTextResponse {
    /// Rewritten prompt, trimmed of surrounding whitespace.
    pub enhanced: String,
}
