//! Animation resource registry.
//!
//! Animations are ordered lists of frame keys played at a fixed rate. Frame
//! keys follow the atlas naming `<prefix><zero-padded index>`, e.g.
//! `walk-left.000` … `walk-left.003`, and are generated from an
//! [`AnimationSpec`] rather than listed by hand.
//!
//! Specs can come from a JSON file:
//!
//! ```json
//! [
//!   { "key": "walk-left", "prefix": "walk-left.", "start": 0, "end": 3,
//!     "zero_pad": 3, "frame_rate": 10.0 }
//! ]
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::walkcontroller::WalkAnimations;

/// Frames per second of the built-in walk cycles.
pub const DEFAULT_FRAME_RATE: f32 = 10.0;
/// Frames in each built-in walk cycle.
pub const DEFAULT_WALK_FRAMES: u32 = 4;
/// Highest accepted playback rate in frames per second.
pub const MAX_FRAME_RATE: f32 = 240.0;

/// Serializable description of one animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub key: String,
    pub prefix: String,
    pub start: u32,
    pub end: u32,
    #[serde(default)]
    pub zero_pad: usize,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
}

fn default_frame_rate() -> f32 {
    DEFAULT_FRAME_RATE
}

impl AnimationSpec {
    /// Reject frame rates outside `0..=MAX_FRAME_RATE`.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(format!(
                "Animation '{}' has frame_rate {} (expected 0 to {})",
                self.key, self.frame_rate, MAX_FRAME_RATE
            ));
        }
        Ok(())
    }
}

/// Immutable playback data shared by every entity using the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Frame keys in playback order.
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub frame_rate: f32,
}

impl AnimationResource {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl From<&AnimationSpec> for AnimationResource {
    fn from(spec: &AnimationSpec) -> Self {
        Self {
            frames: generate_frame_names(&spec.prefix, spec.start, spec.end, spec.zero_pad),
            frame_rate: if spec.frame_rate.is_nan() {
                0.0
            } else {
                spec.frame_rate.clamp(0.0, MAX_FRAME_RATE)
            },
        }
    }
}

/// Frame keys `prefix` + index for every index from `start` to `end`
/// inclusive, counting down when `start > end`. Indices are left-padded with
/// zeros to `zero_pad` digits.
pub fn generate_frame_names(prefix: &str, start: u32, end: u32, zero_pad: usize) -> Vec<String> {
    let name = |i: u32| format!("{prefix}{i:0zero_pad$}");
    if start <= end {
        (start..=end).map(name).collect()
    } else {
        (end..=start).rev().map(name).collect()
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&AnimationResource> {
        self.animations.get(key.as_ref())
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn insert_spec(&mut self, spec: &AnimationSpec) {
        self.insert(spec.key.clone(), AnimationResource::from(spec));
    }

    pub fn from_specs(specs: &[AnimationSpec]) -> Self {
        let mut store = Self::new();
        for spec in specs {
            store.insert_spec(spec);
        }
        store
    }

    /// Parse a JSON array of [`AnimationSpec`]s.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let specs: Vec<AnimationSpec> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse animation specs: {}", e))?;
        for spec in &specs {
            spec.validate()?;
        }
        Ok(Self::from_specs(&specs))
    }

    /// Load specs from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read animation file {:?}: {}", path, e))?;
        let store = Self::from_json(&json)?;
        info!(
            "Loaded {} animations from {:?}",
            store.animations.len(),
            path
        );
        Ok(store)
    }

    /// Four-frame, 10 fps walk cycles for every walk key in `animations`.
    pub fn walk_defaults(animations: &WalkAnimations) -> Self {
        let specs: Vec<AnimationSpec> = [
            &animations.walk_left,
            &animations.walk_right,
            &animations.walk_front,
            &animations.walk_back,
        ]
        .into_iter()
        .map(|key| AnimationSpec {
            key: key.clone(),
            prefix: format!("{key}."),
            start: 0,
            end: DEFAULT_WALK_FRAMES - 1,
            zero_pad: 3,
            frame_rate: DEFAULT_FRAME_RATE,
        })
        .collect();
        Self::from_specs(&specs)
    }
}
