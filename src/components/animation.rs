//! Per-entity animation playback state.
//!
//! [`Animation`] points at a definition in
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) and
//! tracks the current frame. The [`animation`](crate::systems::animation::animation)
//! system advances it while `playing` is set.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub playing: bool,
    pub looped: bool,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            animation_key: String::new(),
            frame_index: 0,
            elapsed_time: 0.0,
            playing: false,
            looped: false,
        }
    }
}

impl Animation {
    /// A stopped animation pointing at `animation_key`.
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            ..Self::default()
        }
    }

    /// Start playing `key` from its first frame.
    ///
    /// If `key` is already playing nothing changes, so calling this every
    /// frame keeps the cycle running. Returns true when playback (re)started.
    pub fn play(&mut self, key: &str, looped: bool) -> bool {
        if self.playing && self.animation_key == key {
            self.looped = looped;
            return false;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.playing = true;
        self.looped = looped;
        true
    }

    /// Freeze on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed_time = 0.0;
    }

    pub fn is_playing(&self, key: &str) -> bool {
        self.playing && self.animation_key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped() {
        let anim = Animation::new("walk-left");
        assert_eq!(anim.animation_key, "walk-left");
        assert!(!anim.playing);
        assert!(!anim.is_playing("walk-left"));
    }

    #[test]
    fn test_play_starts_from_first_frame() {
        let mut anim = Animation::new("walk-left");
        anim.frame_index = 3;
        anim.elapsed_time = 0.05;
        assert!(anim.play("walk-right", true));
        assert_eq!(anim.animation_key, "walk-right");
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.0);
        assert!(anim.playing);
        assert!(anim.looped);
    }

    #[test]
    fn test_play_same_key_does_not_restart() {
        let mut anim = Animation::default();
        anim.play("walk-left", true);
        anim.frame_index = 2;
        anim.elapsed_time = 0.04;
        assert!(!anim.play("walk-left", true));
        assert_eq!(anim.frame_index, 2);
        assert_eq!(anim.elapsed_time, 0.04);
    }

    #[test]
    fn test_play_after_stop_restarts() {
        let mut anim = Animation::default();
        anim.play("walk-left", true);
        anim.frame_index = 2;
        anim.stop();
        assert!(!anim.playing);
        assert_eq!(anim.frame_index, 2);
        assert!(anim.play("walk-left", true));
        assert_eq!(anim.frame_index, 0);
    }
}
