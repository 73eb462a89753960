// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared API response types

use serde::{Deserialize, Serialize};

/// Liveness line served at `GET /`.
pub const LIVENESS_MESSAGE: &str = "prism-media-node gateway is running";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
