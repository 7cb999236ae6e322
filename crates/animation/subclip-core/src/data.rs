//! Canonical stored-animation data model.
//!
//! Mirrors the `animation` object of the model documents: a frame rate, a
//! total length in seconds, and one bone track per skeletal joint. Hierarchy
//! order is semantic (parent/child correspondence is positional) and is never
//! reordered by any operation in this crate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel `parent` value for root bones.
pub const NO_PARENT: i32 = -1;

/// A single timestamped pose sample.
///
/// Everything except `time` is opaque payload (`pos`, `rot`, `scl`, or
/// whatever else the exporter wrote) and is carried through verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Seconds from the start of the clip this key belongs to.
    pub time: f32,
    #[serde(flatten)]
    pub pose: Map<String, Value>,
}

/// One joint's keyframe sequence.
///
/// `parent` indexes into `Animation::hierarchy` ([`NO_PARENT`] for roots).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoneTrack {
    pub parent: i32,
    /// Keys sorted by non-decreasing `time`.
    pub keys: Vec<Keyframe>,
}

/// A keyframed skeletal animation as stored in the model document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animation {
    /// Source clips may be unnamed; derived clips carry their range name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Frames per second, positive.
    pub fps: f32,
    /// Total duration in seconds.
    pub length: f32,
    /// One track per bone, order preserved end to end.
    pub hierarchy: Vec<BoneTrack>,
}

impl Animation {
    /// Validate basic invariants (positive fps, non-decreasing key times,
    /// parent indices in bounds).
    pub fn validate_basic(&self) -> Result<(), String> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err("Animation.fps must be a positive number".into());
        }
        if !self.length.is_finite() || self.length < 0.0 {
            return Err("Animation.length must be non-negative".into());
        }
        let bone_count = self.hierarchy.len();
        for (index, bone) in self.hierarchy.iter().enumerate() {
            if bone.parent != NO_PARENT
                && (bone.parent < 0 || bone.parent as usize >= bone_count)
            {
                return Err(format!(
                    "bone {index} has parent {} outside the hierarchy",
                    bone.parent
                ));
            }
            let mut last = -f32::INFINITY;
            for key in &bone.keys {
                if !key.time.is_finite() {
                    return Err(format!("bone {index} has a non-finite key time"));
                }
                if key.time < last {
                    return Err(format!(
                        "key times must be non-decreasing for bone {index}"
                    ));
                }
                last = key.time;
            }
        }
        Ok(())
    }
}
