// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error taxonomy for outbound provider calls

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single outbound provider call.
///
/// No retries are attempted anywhere in the gateway; the first failure
/// surfaces immediately to the route that issued the call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced an HTTP response (connect failure,
    /// timeout, TLS error).
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status.
    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The response body could not be read or decoded as the expected kind.
    #[error("{provider} response could not be decoded: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// Name of the provider that failed.
    pub fn provider(&self) -> &'static str {
        match self {
            UpstreamError::Transport { provider, .. }
            | UpstreamError::Status { provider, .. }
            | UpstreamError::Decode { provider, .. } => provider,
        }
    }

    /// True when the underlying failure was the per-call timeout expiring.
    pub fn is_timeout(&self) -> bool {
        match self {
            UpstreamError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Turn a non-2xx response into `UpstreamError::Status`, reading the body
/// text for diagnostics.
pub(crate) async fn check_status(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::Status {
            provider,
            status,
            body,
        });
    }
    Ok(response)
}
