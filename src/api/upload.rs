// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload extraction shared by the image routes

use axum_extra::extract::multipart::{Multipart, MultipartError};
use bytes::Bytes;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// An uploaded image, held in memory for the request lifetime only.
#[derive(Debug)]
pub struct ImageUpload {
    pub data: Bytes,
    /// Content type declared by the client, when any.
    pub content_type: Option<String>,
}

/// Pull the `image` field out of a multipart body.
///
/// Returns `Ok(None)` when the body carries no such field; decoding
/// failures bubble up for the route to map onto its own error kind.
pub async fn read_image_field(
    multipart: &mut Multipart,
) -> Result<Option<ImageUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMAGE_FIELD) {
            let content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await?;
            return Ok(Some(ImageUpload { data, content_type }));
        }
    }
    Ok(None)
}
