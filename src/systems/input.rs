//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. A press
//! of the debug key triggers
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let sample = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.sample(rl.is_key_down(key), rl.is_key_pressed(key));
    };

    sample(&mut input.direction_up);
    sample(&mut input.direction_down);
    sample(&mut input.direction_left);
    sample(&mut input.direction_right);
    sample(&mut input.mode_debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
