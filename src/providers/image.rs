// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-generation strategies
//!
//! Two interchangeable backends, selected once at startup: a diffusion
//! model endpoint returning raw image bytes, and a templated URL service
//! where the image is rendered lazily by whoever dereferences the URL.
//! Each strategy carries its own fixed style descriptors and variation
//! prompt template, so the pipeline cannot mix them.

use anyhow::{bail, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::error::{check_status, UpstreamError};

const PROVIDER: &str = "image generation";

/// Per-call timeout for diffusion generation.
const DIFFUSION_TIMEOUT: Duration = Duration::from_secs(300);

const DIFFUSION_STYLES: [&str; 3] = [
    "photorealistic style",
    "digital art style",
    "cinematic dramatic lighting style",
];

const URL_STYLES: [&str; 3] = ["realistic photo", "digital art", "cinematic lighting"];

/// A generated image reference: inline payload or fetch-on-demand URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    DataUri(String),
    Url(String),
}

impl ImageRef {
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::DataUri(s) | ImageRef::Url(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ImageRef::DataUri(s) | ImageRef::Url(s) => s,
        }
    }
}

/// Image-generation capability.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Fixed style descriptors, in generation order.
    fn styles(&self) -> [&'static str; 3];

    /// Derive the styled prompt for one variation.
    fn variation_prompt(&self, caption: &str, style: &str) -> String;

    /// Produce one image for `prompt`. At most one outbound call.
    async fn generate(&self, prompt: &str) -> Result<ImageRef, UpstreamError>;
}

/// Strategy posting to a diffusion model endpoint that returns raw image
/// bytes, re-encoded here as an inline data URI.
pub struct DiffusionImageGenerator {
    client: Client,
    endpoint: String,
}

impl DiffusionImageGenerator {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().timeout(DIFFUSION_TIMEOUT).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Diffusion generator configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ImageGenerator for DiffusionImageGenerator {
    fn styles(&self) -> [&'static str; 3] {
        DIFFUSION_STYLES
    }

    fn variation_prompt(&self, caption: &str, style: &str) -> String {
        format!("A {style} version of {caption}")
    }

    async fn generate(&self, prompt: &str) -> Result<ImageRef, UpstreamError> {
        let body = serde_json::json!({ "inputs": prompt });

        debug!("Diffusion POST {} (prompt_len={})", self.endpoint, prompt.len());

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

        let bytes = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Decode {
                provider: PROVIDER,
                source,
            })?;

        Ok(ImageRef::DataUri(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&bytes)
        )))
    }
}

/// Strategy building a fetch-on-demand URL per prompt. No bytes pass
/// through this node; the client renders the image by dereferencing the
/// returned URL.
pub struct UrlImageGenerator {
    base: Url,
}

impl UrlImageGenerator {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base.trim_end_matches('/'))?;
        if base.cannot_be_a_base() {
            bail!("image URL template base '{base}' cannot carry a path segment");
        }
        info!("URL image generator configured: base={}", base);
        Ok(Self { base })
    }

    /// Append the percent-encoded prompt as one path segment.
    fn render(&self, prompt: &str) -> String {
        let mut url = self.base.clone();
        // Invariant from new(): base is never cannot-be-a-base.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(prompt);
        }
        url.to_string()
    }
}

#[async_trait]
impl ImageGenerator for UrlImageGenerator {
    fn styles(&self) -> [&'static str; 3] {
        URL_STYLES
    }

    fn variation_prompt(&self, caption: &str, style: &str) -> String {
        format!("{caption} in {style} style")
    }

    async fn generate(&self, prompt: &str) -> Result<ImageRef, UpstreamError> {
        Ok(ImageRef::Url(self.render(prompt)))
    }
}
