// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-generation inference client used for prompt enhancement

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::error::{check_status, UpstreamError};

const PROVIDER: &str = "text generation";

/// Instruction prepended to every enhancement request.
const ENHANCE_INSTRUCTION: &str = "Enhance this text prompt for image generation:";

/// Per-call timeout for text enhancement.
const TEXTGEN_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for a hosted text-generation inference endpoint.
pub struct TextGenClient {
    client: Client,
    endpoint: String,
}

impl TextGenClient {
    /// Create a new text-generation client.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().timeout(TEXTGEN_TIMEOUT).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Text generation client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Ask the model to rewrite `prompt` for image generation.
    ///
    /// Returns the raw provider JSON; the caller picks the normalization
    /// policy for its route.
    pub async fn enhance(&self, prompt: &str) -> Result<Value, UpstreamError> {
        let body = serde_json::json!({
            "inputs": format!("{ENHANCE_INSTRUCTION}\n{prompt}"),
        });

        debug!("Text generation POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                provider: PROVIDER,
                source,
            })?;

        let response = check_status(PROVIDER, response).await?;

        response
            .json()
            .await
            .map_err(|source| UpstreamError::Decode {
                provider: PROVIDER,
                source,
            })
    }
}
