// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze_image;
pub mod analyze_text;
pub mod enhance_text;
pub mod errors;
pub mod generate_image;
pub mod generate_variations;
pub mod handlers;
pub mod http_server;
pub mod upload;

pub use analyze_image::{analyze_image_handler, AnalyzeImageResponse};
pub use analyze_text::{analyze_text_handler, AnalyzeTextRequest, AnalyzeTextResponse};
pub use enhance_text::{enhance_text_handler, EnhanceTextRequest, EnhanceTextResponse};
pub use errors::{ApiError, ErrorEnvelope};
pub use generate_image::{generate_image_handler, GenerateImageRequest, GenerateImageResponse};
pub use generate_variations::{generate_variations_handler, GenerateVariationsResponse};
pub use http_server::{create_app, start_server, AppState};
