//! Subclip core (engine-agnostic)
//!
//! Splits one keyframed skeletal animation into named sub-clips. Callers
//! hand in the stored animation (or the whole model document) plus a list of
//! named frame ranges; each range carves out an independent clip with its
//! keys filtered to the window and re-timed to start at zero.
//!
//! - `data`: the stored animation model (`fps`, `length`, bone `hierarchy`).
//! - `range`: textual `name=start..end` frame-window parsing.
//! - `split`: the carving itself, a pure function with no I/O.
//! - `document`: the JSON boundary rewriting `animation` into `animations`.

pub mod data;
pub mod document;
pub mod range;
pub mod split;

// Re-exports for consumers (loaders, CLI front ends)
pub use data::{Animation, BoneTrack, Keyframe, NO_PARENT};
pub use document::{split_document_json, split_document_value, DocumentError};
pub use range::{FormatError, FrameRange};
pub use split::split_animation;
