//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the scenes care about and exposes it
//! to systems via the [`InputState`] resource. Arrow keys move, `D` toggles
//! the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::locomotion::DirectionalInput;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }

    /// Store one frame's sample of the bound key.
    pub fn sample(&mut self, down: bool, pressed: bool) {
        self.active = down;
        self.just_pressed = pressed;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_D),
        }
    }
}

impl InputState {
    /// The four movement keys as a [`DirectionalInput`].
    pub fn directional(&self) -> DirectionalInput {
        DirectionalInput {
            up: self.direction_up.active,
            down: self.direction_down.active,
            left: self.direction_left.active,
            right: self.direction_right.active,
        }
    }

    /// Input state with the given movement keys held. Handy for tests and
    /// scripted playback.
    pub fn with_directions(input: DirectionalInput) -> Self {
        let mut state = Self::default();
        state.direction_up.active = input.up;
        state.direction_down.active = input.down;
        state.direction_left.active = input.left;
        state.direction_right.active = input.right;
        state
    }
}
