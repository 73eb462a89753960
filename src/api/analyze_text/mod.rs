// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text analysis API endpoint module
//!
//! Provides POST /api/analyze-text for sentiment/tone/intent analysis via
//! the chat relay backend.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_text_handler;
pub use request::AnalyzeTextRequest;
pub use response::AnalyzeTextResponse;
