//! JSON document boundary.
//!
//! Model documents carry the clip under a top-level `animation` field next to
//! unrelated fields (`metadata`, `materials`, ...). Splitting rewrites the
//! document in place: `animation` is removed and replaced with `animations`,
//! an object mapping each range name to its carved clip. Every other field
//! passes through untouched.

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::data::Animation;
use crate::range::FrameRange;
use crate::split::split_animation;

/// Errors produced while rewriting a model document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document parse error: {0}")]
    Parse(String),
    #[error("document has no `animation` object to split")]
    MissingAnimation,
    #[error("`animation` is malformed: {0}")]
    InvalidAnimation(String),
    #[error("serialize split document: {0}")]
    Serialize(String),
}

/// Replace `animation` in a parsed document with the `animations` mapping.
pub fn split_document_value(
    document: JsonValue,
    ranges: &[FrameRange],
) -> Result<JsonValue, DocumentError> {
    let JsonValue::Object(mut fields) = document else {
        return Err(DocumentError::Parse(
            "top-level document must be a JSON object".into(),
        ));
    };
    let animation = fields
        .remove("animation")
        .ok_or(DocumentError::MissingAnimation)?;
    let animation: Animation = serde_json::from_value(animation)
        .map_err(|e| DocumentError::InvalidAnimation(e.to_string()))?;
    animation
        .validate_basic()
        .map_err(DocumentError::InvalidAnimation)?;

    let clips = split_animation(&animation, ranges);
    let mut animations = Map::new();
    for (name, clip) in clips {
        let clip = serde_json::to_value(clip)
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        animations.insert(name, clip);
    }
    fields.insert("animations".into(), JsonValue::Object(animations));
    Ok(JsonValue::Object(fields))
}

/// String-level convenience over [`split_document_value`].
pub fn split_document_json(
    document: &str,
    ranges: &[FrameRange],
) -> Result<String, DocumentError> {
    let parsed: JsonValue =
        serde_json::from_str(document).map_err(|e| DocumentError::Parse(e.to_string()))?;
    let rewritten = split_document_value(parsed, ranges)?;
    serde_json::to_string(&rewritten).map_err(|e| DocumentError::Serialize(e.to_string()))
}
