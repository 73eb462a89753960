// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-captioning inference client

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::error::{check_status, UpstreamError};

const PROVIDER: &str = "captioning";

/// Per-call timeout for captioning.
const CAPTION_TIMEOUT: Duration = Duration::from_secs(180);

/// Content type assumed when the upload declares none.
const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Build the inline data URI the captioning endpoint expects.
pub(crate) fn data_uri(image: &[u8], content_type: Option<&str>) -> String {
    format!(
        "data:{};base64,{}",
        content_type.unwrap_or(DEFAULT_CONTENT_TYPE),
        STANDARD.encode(image)
    )
}

/// Client for a hosted image-captioning inference endpoint.
pub struct CaptionClient {
    client: Client,
    endpoint: String,
}

impl CaptionClient {
    /// Create a new captioning client.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().timeout(CAPTION_TIMEOUT).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Caption client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Caption raw image bytes.
    ///
    /// The image is posted inline as a base64 data URI carrying the upload's
    /// declared content type. Returns the raw provider JSON; callers pick
    /// the normalization policy for their route.
    pub async fn caption(
        &self,
        image: &[u8],
        content_type: Option<&str>,
    ) -> Result<Value, UpstreamError> {
        let body = serde_json::json!({ "inputs": data_uri(image, content_type) });

        debug!(
            "Caption POST {} ({} image bytes)",
            self.endpoint,
            image.len()
        );

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
