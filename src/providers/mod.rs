// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod caption;
pub mod chat;
pub mod error;
pub mod image;
pub mod normalize;
pub mod textgen;

pub use caption::CaptionClient;
pub use chat::ChatRelayClient;
pub use error::UpstreamError;
pub use image::{DiffusionImageGenerator, ImageGenerator, ImageRef, UrlImageGenerator};
pub use textgen::TextGenClient;
