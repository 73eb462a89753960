// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod pipeline;
pub mod providers;
pub mod version;

// Re-export main types
pub use api::{ApiError, AppState, ErrorEnvelope};
pub use config::{GatewayConfig, ImageBackend};
pub use pipeline::{PipelineError, VariationPipeline, VariationSet};
pub use providers::{
    CaptionClient, ChatRelayClient, DiffusionImageGenerator, ImageGenerator, ImageRef,
    TextGenClient, UpstreamError, UrlImageGenerator,
};
