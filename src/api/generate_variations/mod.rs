// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Variation generation API endpoint module
//!
//! Provides POST /api/generate-variations: caption the uploaded image,
//! then generate three styled variants.

pub mod handler;
pub mod response;

pub use handler::generate_variations_handler;
pub use response::GenerateVariationsResponse;
