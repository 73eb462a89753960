// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image analysis API endpoint module
//!
//! Provides POST /api/analyze-image for captioning an uploaded image.

pub mod handler;
pub mod response;

pub use handler::analyze_image_handler;
pub use response::AnalyzeImageResponse;
