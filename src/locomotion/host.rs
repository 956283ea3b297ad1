//! Command surface between the walk controller and whatever runs it.
//!
//! The controller never owns physics or animation state. Each frame it reads
//! input and the previous velocity from the host, then issues exactly one
//! velocity command and exactly one animation command (a stop may be followed
//! by a static frame). The host decides what those commands mean.
//!
//! [`EcsWalkHost`](crate::systems::walkcontroller::EcsWalkHost) is the
//! implementation used by the engine; tests use recording hosts.

use raylib::prelude::Vector2;

use super::DirectionalInput;

pub trait WalkHost {
    /// Directional input for the current frame.
    fn read_input(&self) -> DirectionalInput;

    /// Velocity the body is moving at, as left by the previous frame.
    fn velocity(&self) -> Vector2;

    fn set_velocity(&mut self, velocity: Vector2);

    /// Start `key`. Calling this with the animation already playing must not
    /// restart it.
    fn play_animation(&mut self, key: &str, looped: bool);

    /// Freeze playback on the current frame.
    fn stop_animation(&mut self);

    /// Show a single static frame (idle pose).
    fn set_static_frame(&mut self, key: &str);
}
