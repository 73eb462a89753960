// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Caption-then-generate variation pipeline
//!
//! The one multi-step operation in the gateway: caption the uploaded image,
//! then generate one styled image per fixed style descriptor. Steps run
//! strictly in sequence; the generation prompts depend on the caption, and
//! the three generation calls are issued one after another, never
//! concurrently.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::providers::{normalize, CaptionClient, ImageGenerator, ImageRef, UpstreamError};

/// Caption substituted when the captioning provider returns no usable text.
const FALLBACK_CAPTION: &str = "an image";

/// Failure of any pipeline step. Partially generated images are discarded;
/// the error carries the first failing step's message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("caption step failed: {0}")]
    Caption(#[source] UpstreamError),

    #[error("generation step failed for '{style}': {source}")]
    Generation {
        style: &'static str,
        #[source]
        source: UpstreamError,
    },
}

/// Output of a successful run: exactly three images in style order.
#[derive(Debug)]
pub struct VariationSet {
    pub caption: String,
    pub images: Vec<ImageRef>,
}

/// Orchestrates the caption and generation clients into one operation.
pub struct VariationPipeline {
    captioner: Arc<CaptionClient>,
    generator: Arc<dyn ImageGenerator>,
}

impl VariationPipeline {
    pub fn new(captioner: Arc<CaptionClient>, generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            captioner,
            generator,
        }
    }

    /// Caption the uploaded image, then generate one image per style.
    ///
    /// Caption extraction applies only the array-wrapped rule here; any
    /// other provider shape maps to the fallback caption rather than the
    /// serialized-JSON diagnostic, which would make a nonsense prompt.
    pub async fn generate(
        &self,
        image: &[u8],
        content_type: Option<&str>,
    ) -> Result<VariationSet, PipelineError> {
        // Step 1: caption the uploaded image
        let raw = self
            .captioner
            .caption(image, content_type)
            .await
            .map_err(PipelineError::Caption)?;

        let caption = match normalize::array_generated_text(&raw) {
            Some(text) => text.to_string(),
            None => FALLBACK_CAPTION.to_string(),
        };
        debug!("Variation caption resolved: {:?}", caption);

        // Step 2: one generation call per style, in fixed order
        let styles = self.generator.styles();
        let mut images = Vec::with_capacity(styles.len());
        for style in styles {
            let prompt = self.generator.variation_prompt(&caption, style);
            let image = self
                .generator
                .generate(&prompt)
                .await
                .map_err(|source| PipelineError::Generation { style, source })?;
            images.push(image);
        }

        info!(
            "Generated {} variations for caption {:?}",
            images.len(),
            caption
        );

        Ok(VariationSet { caption, images })
    }
}
