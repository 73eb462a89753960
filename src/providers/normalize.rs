// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shape-tolerant extraction of generated text from provider responses
//!
//! Hosted inference endpoints wrap their output either as a one-element
//! array of `{"generated_text": ...}` objects or as a bare object with a
//! top-level `generated_text` field, depending on model and deployment.
//! The functions below form an ordered decision table over those shapes;
//! the first matching rule wins. A `generated_text` field holding anything
//! other than a string never matches and falls through to the next rule.

use serde_json::Value;

/// Rule 1: a sequence whose first element carries a string `generated_text`.
pub fn array_generated_text(value: &Value) -> Option<&str> {
    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
}

/// Rules 1-2: array-wrapped first, then a top-level `generated_text` field.
pub fn generated_text(value: &Value) -> Option<&str> {
    array_generated_text(value).or_else(|| value.get("generated_text").and_then(Value::as_str))
}

/// Rules 1-3: when no rule matches, the entire response serialized to
/// compact JSON text. The serialized form is diagnostic; call sites with a
/// domain fallback sentinel substitute it themselves.
pub fn generated_text_or_raw(value: &Value) -> String {
    match generated_text(value) {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}
