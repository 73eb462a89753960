// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration, read once at startup
//!
//! All provider endpoints and the image-backend strategy are fixed for the
//! process lifetime; nothing consults the environment after `from_env`.

use anyhow::{bail, Context, Result};
use std::env;

/// Default listening port when `PORT` is unset.
const DEFAULT_PORT: u16 = 5000;

const DEFAULT_TEXTGEN_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-base";

const DEFAULT_CHAT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

const DEFAULT_CHAT_MODEL: &str = "meta-llama/llama-3-8b-instruct:free";

const DEFAULT_CAPTION_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-base";

const DEFAULT_DIFFUSION_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-2";

const DEFAULT_IMAGE_URL_BASE: &str = "https://image.pollinations.ai/prompt";

/// Image-generation strategy, selected at deployment time, never per
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBackend {
    /// Model endpoint returning raw image bytes, re-encoded as a data URI.
    Diffusion { endpoint: String },
    /// Templated fetch-on-demand URL; no bytes pass through this node.
    UrlTemplate { base: String },
}

/// Immutable startup configuration, passed explicitly into the clients and
/// request handlers.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    /// Bearer key for the chat relay backend, when the deployment has one.
    pub relay_api_key: Option<String>,
    pub textgen_endpoint: String,
    pub chat_endpoint: String,
    pub chat_model: String,
    pub caption_endpoint: String,
    pub image_backend: ImageBackend,
}

impl GatewayConfig {
    /// Read configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;

        let image_backend = parse_backend(
            env::var("IMAGE_BACKEND").ok().as_deref(),
            env_or("DIFFUSION_ENDPOINT", DEFAULT_DIFFUSION_ENDPOINT),
            env_or("IMAGE_URL_TEMPLATE", DEFAULT_IMAGE_URL_BASE),
        )?;

        Ok(Self {
            port,
            relay_api_key: env::var("RELAY_API_KEY").ok(),
            textgen_endpoint: env_or("TEXTGEN_ENDPOINT", DEFAULT_TEXTGEN_ENDPOINT),
            chat_endpoint: env_or("CHAT_ENDPOINT", DEFAULT_CHAT_ENDPOINT),
            chat_model: env_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            caption_endpoint: env_or("CAPTION_ENDPOINT", DEFAULT_CAPTION_ENDPOINT),
            image_backend,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid PORT value '{raw}'")),
        None => Ok(DEFAULT_PORT),
    }
}

fn parse_backend(
    raw: Option<&str>,
    diffusion_endpoint: String,
    url_base: String,
) -> Result<ImageBackend> {
    match raw {
        None | Some("diffusion") => Ok(ImageBackend::Diffusion {
            endpoint: diffusion_endpoint,
        }),
        Some("url") => Ok(ImageBackend::UrlTemplate { base: url_base }),
        Some(other) => bail!("unknown IMAGE_BACKEND '{other}', expected 'diffusion' or 'url'"),
    }
}
