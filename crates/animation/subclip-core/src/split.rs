//! Carving named sub-clips out of a source animation.
//!
//! Model:
//! - Each range selects the closed time window
//!   `[start * 1/fps, end * 1/fps]` in source-clip seconds.
//! - Keys inside the window are kept in order and re-timed onto a uniform
//!   grid: the i-th retained key lands at `i * 1/fps`, regardless of how the
//!   source keys were spaced. Downstream players rely on that uniform
//!   spacing, so re-basing is by index, not by subtracting the window start.
//! - Bone topology (`hierarchy` order and `parent` values) and the pose
//!   payload on every retained key are carried through untouched.
//!
//! API:
//! - split_animation(&Animation, &[FrameRange]) -> HashMap<name, Animation>

use std::collections::HashMap;

use crate::data::{Animation, BoneTrack, Keyframe};
use crate::range::FrameRange;

/// Carve one clip per range out of `source`.
///
/// Pure function over its inputs: `source` is never mutated, and identical
/// inputs always produce identical output. Ranges are processed in caller
/// order; if two ranges share a name the later one wins.
///
/// An inverted range (`start > end`) or a window holding no keys for some
/// bone is not an error: the affected tracks simply come out empty.
pub fn split_animation(
    source: &Animation,
    ranges: &[FrameRange],
) -> HashMap<String, Animation> {
    let mut clips = HashMap::with_capacity(ranges.len());
    for range in ranges {
        let clip = carve_range(source, range);
        if clips.insert(range.name.clone(), clip).is_some() {
            log::warn!(
                "range name '{}' given more than once; keeping the later range",
                range.name
            );
        }
    }
    clips
}

fn carve_range(source: &Animation, range: &FrameRange) -> Animation {
    let frame_duration = 1.0 / source.fps;
    let window_start = range.start as f32 * frame_duration;
    let window_end = range.end as f32 * frame_duration;

    let hierarchy = source
        .hierarchy
        .iter()
        .map(|bone| BoneTrack {
            parent: bone.parent,
            keys: bone
                .keys
                .iter()
                .filter(|key| key.time >= window_start && key.time <= window_end)
                .enumerate()
                .map(|(index, key)| Keyframe {
                    time: index as f32 * frame_duration,
                    pose: key.pose.clone(),
                })
                .collect(),
        })
        .collect();

    Animation {
        name: Some(range.name.clone()),
        fps: source.fps,
        // Negative for inverted ranges; such clips also carry no keys.
        length: (range.end as f32 - range.start as f32) * frame_duration,
        hierarchy,
    }
}
