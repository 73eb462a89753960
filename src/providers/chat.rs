// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completions relay client for text analysis

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::error::{check_status, UpstreamError};

const PROVIDER: &str = "chat relay";

const ANALYZE_SYSTEM_PROMPT: &str =
    "Analyze the text and return a JSON with sentiment, tone, and intent.";

/// Returned when the relay produced no message content.
const ANALYSIS_FALLBACK: &str = "{}";

/// Per-call timeout for relay completions.
const CHAT_TIMEOUT: Duration = Duration::from_secs(120);

const MAX_TOKENS: u32 = 200;

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions relay.
pub struct ChatRelayClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatRelayClient {
    /// Create a new relay client. `endpoint` is the API base, e.g.
    /// `https://openrouter.ai/api/v1`.
    pub fn new(endpoint: &str, model: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(CHAT_TIMEOUT).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Chat relay client configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key,
        })
    }

    /// Analyze `text` for sentiment, tone, and intent.
    ///
    /// Returns the relay's message content, or `"{}"` when the relay
    /// produced no choices.
    pub async fn analyze(&self, text: &str) -> Result<String, UpstreamError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: ANALYZE_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Chat relay POST {}", url);

        let mut builder = self.client.post(&url).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                provider: PROVIDER,
                source,
            })?;

        let response = check_status(PROVIDER, response).await?;

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|source| UpstreamError::Decode {
                    provider: PROVIDER,
                    source,
                })?;

        Ok(chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_else(|| ANALYSIS_FALLBACK.to_string()))
    }
}
